mod gateway_response;
mod login_request;
mod login_status;
mod message_coding;
mod message_type;
mod phone_number;
mod send_request;
mod send_status;

pub use gateway_response::GatewayResponse;
pub use login_request::LoginRequest;
pub use login_status::LoginStatus;
pub use message_coding::MessageCoding;
pub use message_type::MessageType;
pub use phone_number::{PhoneNumber, PhoneNumberError};
pub use send_request::{RESEND_TIMEOUT, SEND_TYPE, SendRequest};
pub use send_status::SendStatus;
