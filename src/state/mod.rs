mod gradient_controller;

pub use gradient_controller::GradientController;
