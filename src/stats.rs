use crate::codec::{format_date, format_time};
use crate::error::EmptyInputError;
use crate::ticket::{Carrier, FlightTicket};
use std::collections::HashMap;

/// Shortest flight per carrier, kept in the order carriers first appear in the input.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CarrierDurations {
    entries: Vec<(Carrier, i64)>,
    index: HashMap<Carrier, usize>,
}

impl CarrierDurations {
    fn record(&mut self, carrier: &str, secs: i64) {
        match self.index.get(carrier) {
            Some(&i) => {
                let stored = &mut self.entries[i].1;
                if secs < *stored {
                    *stored = secs;
                }
            }
            None => {
                self.index.insert(carrier.to_string(), self.entries.len());
                self.entries.push((carrier.to_string(), secs));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, carrier: &str) -> Option<i64> {
        self.index.get(carrier).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(c, secs)| (c.as_str(), *secs))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn min_durations_by_carrier(tickets: &[FlightTicket]) -> CarrierDurations {
    let mut durations = CarrierDurations::default();
    for ticket in tickets {
        let secs = ticket.duration_secs();
        if secs < 0 {
            tracing::warn!(
                "{} {}->{} on {} {} lands {}s before departure",
                ticket.carrier,
                ticket.origin,
                ticket.destination,
                format_date(&ticket.departure_date),
                format_time(&ticket.departure_time),
                -secs
            );
        }
        durations.record(&ticket.carrier, secs);
    }
    tracing::debug!("Minimum durations computed for {} carriers", durations.len());
    durations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStatistics {
    pub mean: f64,
    pub median: f64,
    pub difference: f64,
}

pub fn price_statistics(tickets: &[FlightTicket]) -> Result<PriceStatistics, EmptyInputError> {
    let mut prices = tickets.iter().map(|t| t.price as f64).collect::<Vec<f64>>();
    if prices.is_empty() {
        return Err(EmptyInputError);
    }

    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    let median = median(&mut prices);
    tracing::debug!("Price statistics over {} tickets: mean {}, median {}", prices.len(), mean, median);

    Ok(PriceStatistics {
        mean,
        median,
        difference: mean - median,
    })
}

/// Sorts `values` in place. Callers guarantee a non-empty slice.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
