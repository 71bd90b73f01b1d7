pub mod gradient_descent;
pub mod nesterov;
pub mod newton;
