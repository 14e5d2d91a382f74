mod common;

use common::{at, direct_flight, eur};
use flight_booking::{Airline, Airport, BookingError, DirectFlight, Flight, ReferenceId};

#[test]
fn test_same_airport_is_rejected() {
    let result = direct_flight(
        "SOF",
        "SOF",
        "2017-01-01T02:30:00+02:00",
        "2017-01-01T03:30:00+02:00",
    );

    assert!(matches!(
        result,
        Err(BookingError::SameAirportError { ref code }) if code == "SOF"
    ));
}

#[test]
fn test_accessors_return_supplied_values() -> anyhow::Result<()> {
    let departure = at("2017-01-01T02:30:00+02:00");
    let arrival = at("2017-01-01T03:30:00+01:00");

    let flight = DirectFlight::new(
        ReferenceId::new("FB1001")?,
        Airport::new("SOF")?,
        Airport::new("MUC")?,
        departure,
        arrival,
        Airline::new("LH")?,
        eur(180),
    )?;

    assert_eq!(flight.reference_id().as_str(), "FB1001");
    assert_eq!(flight.departure_airport(), &Airport::new("SOF")?);
    assert_eq!(flight.arrival_airport(), &Airport::new("MUC")?);
    assert_eq!(flight.departure_time(), departure);
    assert_eq!(flight.arrival_time(), arrival);
    assert_eq!(flight.airline().as_str(), "LH");
    assert_eq!(flight.price(), &eur(180));

    // 02:30 +02:00 -> 03:30 +01:00 is two hours of flying
    assert_eq!(flight.duration().hours, 2);
    Ok(())
}

#[test]
fn test_error_is_reported_as_validation_failure() {
    let err = direct_flight(
        "JFK",
        "jfk",
        "2017-01-01T02:30:00+02:00",
        "2017-01-01T03:30:00+02:00",
    )
    .unwrap_err();

    assert_eq!(
        err.category(),
        flight_booking::utils::error::ErrorCategory::Validation
    );
}
