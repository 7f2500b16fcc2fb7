// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! euro {
    // Currency label shorthand: euro!(580) → "€580"
    ($amount:expr) => {
        ::std::format!("€{}", $amount)
    };
}
