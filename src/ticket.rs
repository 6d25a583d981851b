use crate::codec::{self, FormatError};
use crate::error::LoadError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use std::path::Path;

pub type Carrier = String;

#[derive(Clone, Debug, PartialEq)]
pub struct FlightTicket {
    pub carrier: Carrier,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,
    pub price: u32,
}

impl FlightTicket {
    pub fn departure(&self) -> NaiveDateTime {
        self.departure_date.and_time(self.departure_time)
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival_date.and_time(self.arrival_time)
    }

    /// Signed seconds from departure to arrival. Negative when the record lands before it takes off.
    pub fn duration_secs(&self) -> i64 {
        (self.arrival() - self.departure()).num_seconds()
    }
}

/// Ticket exactly as it sits in the input file, before date and time fields are decoded.
#[derive(Deserialize)]
struct RawTicket {
    carrier: String,
    origin: String,
    destination: String,
    departure_date: String,
    departure_time: String,
    arrival_date: String,
    arrival_time: String,
    price: u32,
}

impl RawTicket {
    fn decode(self, index: usize) -> Result<FlightTicket, LoadError> {
        let field = move |name: &'static str| move |source: FormatError| LoadError::Field {
            index,
            field: name,
            source,
        };

        Ok(FlightTicket {
            departure_date: codec::parse_date(&self.departure_date).map_err(field("departure_date"))?,
            departure_time: codec::parse_time(&self.departure_time).map_err(field("departure_time"))?,
            arrival_date: codec::parse_date(&self.arrival_date).map_err(field("arrival_date"))?,
            arrival_time: codec::parse_time(&self.arrival_time).map_err(field("arrival_time"))?,
            carrier: self.carrier,
            origin: self.origin,
            destination: self.destination,
            price: self.price,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketList {
    pub tickets: Vec<FlightTicket>,
}

impl TicketList {
    pub fn new(tickets: Vec<FlightTicket>) -> TicketList {
        TicketList { tickets }
    }

    pub fn from_json(data: &str) -> Result<Self, LoadError> {
        #[derive(Deserialize)]
        struct RawData {
            tickets: Vec<RawTicket>,
        }
        let raw: RawData = serde_json::from_str(data)?;

        let tickets = raw
            .tickets
            .into_iter()
            .enumerate()
            .map(|(i, t)| t.decode(i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TicketList::new(tickets))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_json(&data)?;
        tracing::info!("Loaded {} tickets from {}", list.tickets.len(), path.display());
        Ok(list)
    }
}
