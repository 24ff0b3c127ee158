pub mod error;
pub mod payment_intent;
pub mod payment_provider;
pub mod stripe_provider;

pub use error::{PaymentError, Result as PaymentResult};
pub use payment_intent::{NewPaymentIntent, PaymentIntent};
pub use payment_provider::{PaymentProvider, configured_provider};
pub use stripe_provider::StripeProvider;
