pub mod verify_signature;
