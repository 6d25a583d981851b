use crate::codec::{parse_date, parse_time};
use crate::ticket::FlightTicket;
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn add_ticket(
    tickets: &mut Vec<FlightTicket>,
    carrier: &str,
    departure: (&str, &str),
    arrival: (&str, &str),
    price: u32,
) {
    tickets.push(FlightTicket {
        carrier: carrier.to_string(),
        origin: "VVO".to_string(),
        destination: "TLV".to_string(),
        departure_date: parse_date(departure.0).unwrap(),
        departure_time: parse_time(departure.1).unwrap(),
        arrival_date: parse_date(arrival.0).unwrap(),
        arrival_time: parse_time(arrival.1).unwrap(),
        price,
    });
}

/// Ticket departing at noon on 12.05.18 and landing `secs` later, to the minute.
pub fn ticket(carrier: &str, secs: i64, price: u32) -> FlightTicket {
    let departure = NaiveDate::from_ymd_opt(2018, 5, 12)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    let arrival = departure + TimeDelta::seconds(secs);
    FlightTicket {
        carrier: carrier.to_string(),
        origin: "VVO".to_string(),
        destination: "TLV".to_string(),
        departure_date: departure.date(),
        departure_time: departure.time(),
        arrival_date: arrival.date(),
        arrival_time: arrival.time(),
        price,
    }
}

pub fn priced(prices: &[u32]) -> Vec<FlightTicket> {
    prices.iter().map(|&p| ticket("SU", 3600, p)).collect()
}

pub fn arb_carrier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TK".to_string()),
        Just("S7".to_string()),
        Just("SU".to_string()),
        Just("BA".to_string()),
    ]
}

pub fn arb_ticket() -> impl Strategy<Value = FlightTicket> {
    (arb_carrier(), -120..3000i64, 0..100_000u32)
        .prop_map(|(carrier, minutes, price)| ticket(&carrier, minutes * 60, price))
}
