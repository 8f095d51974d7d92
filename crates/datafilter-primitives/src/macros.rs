#[macro_export]
macro_rules! comparison_operator_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Eq, "=", negated = Ne, null_check = false),
            (Ne, "<>", negated = Eq, null_check = false),
            (Gt, ">", negated = Lte, null_check = false),
            (Gte, ">=", negated = Lt, null_check = false),
            (Lt, "<", negated = Gte, null_check = false),
            (Lte, "<=", negated = Gt, null_check = false),
            (Contains, "contains", negated = NotContains, null_check = false),
            (NotContains, "notcontains", negated = Contains, null_check = false),
            (IsBlank, "isblank", negated = IsNotBlank, null_check = true),
            (IsNotBlank, "isnotblank", negated = IsBlank, null_check = true),
        }
    };
}

macro_rules! comparison_operator_registry {
    ($macro:ident) => {
        $crate::comparison_operator_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::comparison_operator_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! token_from_registry {
    ( @args $op:expr; @entries $( ($variant:ident, $token:literal, negated = $negated:ident, null_check = $null_check:expr) ),* $(,)? ) => {
        match $op {
            $(
                $crate::ComparisonOperator::$variant => $token,
            )*
        }
    };
}

macro_rules! negation_from_registry {
    ( @args $op:expr; @entries $( ($variant:ident, $token:literal, negated = $negated:ident, null_check = $null_check:expr) ),* $(,)? ) => {
        match $op {
            $(
                $crate::ComparisonOperator::$variant => $crate::ComparisonOperator::$negated,
            )*
        }
    };
}

macro_rules! null_check_from_registry {
    ( @args $op:expr; @entries $( ($variant:ident, $token:literal, negated = $negated:ident, null_check = $null_check:expr) ),* $(,)? ) => {
        match $op {
            $(
                $crate::ComparisonOperator::$variant => $null_check,
            )*
        }
    };
}

macro_rules! parse_from_registry {
    ( @args $token:expr; @entries $( ($variant:ident, $literal:literal, negated = $negated:ident, null_check = $null_check:expr) ),* $(,)? ) => {
        match $token {
            $(
                $literal => Some($crate::ComparisonOperator::$variant),
            )*
            _ => None,
        }
    };
}

macro_rules! all_operators_from_registry {
    ( @entries $( ($variant:ident, $token:literal, negated = $negated:ident, null_check = $null_check:expr) ),* $(,)? ) => {
        [ $( $crate::ComparisonOperator::$variant ),* ]
    };
}
