pub mod order_form;
pub mod quantity_stepper;

pub use order_form::OrderForm;
pub use quantity_stepper::QuantityStepper;
