/// Ports module defining the interfaces between the application core and
/// its infrastructure (hexagonal architecture).
pub mod outbound;
