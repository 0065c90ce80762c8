pub mod rfc59;
