use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

/// The most recent temperature/humidity observation reported by the device.
///
/// Values are stored exactly as received. The device may report readings
/// outside any physical range and the server keeps them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity as a percentage
    pub humidity: f64,
}

impl Default for Reading {
    /// The zero-value sentinel returned before the first ingest.
    fn default() -> Self {
        Reading {
            temperature: 0.0,
            humidity: 0.0,
        }
    }
}

/// The current set of alert boundary values configured by the dashboard.
///
/// The server stores whatever four numbers it is given; `temp_min` may
/// exceed `temp_max` (same for humidity) without being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub temp_min: f64,
    pub temp_max: f64,
    pub hum_min: f64,
    pub hum_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            temp_min: 18.0,
            temp_max: 28.0,
            hum_min: 30.0,
            hum_max: 60.0,
        }
    }
}

/// In-memory holder for the single current [`Reading`] and [`Thresholds`].
///
/// The two records sit behind independent locks so that threshold updates
/// never block reading ingestion. Reads hand out copies; callers never see
/// a partially written record. Nothing is persisted, both records are lost
/// on restart.
#[derive(Debug, Default)]
pub struct StateStore {
    reading: RwLock<Reading>,
    thresholds: RwLock<Thresholds>,
}

impl StateStore {
    /// Create a store holding the sentinel reading and default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current reading; the zero-value sentinel until the first ingest.
    pub fn reading(&self) -> Reading {
        // Assigning a Copy value cannot tear, so a poisoned lock still
        // holds a whole record.
        *self.reading.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the stored reading completely. The previous value is
    /// discarded.
    pub fn replace_reading(&self, reading: Reading) {
        *self.reading.write().unwrap_or_else(PoisonError::into_inner) = reading;
    }

    /// Current thresholds; the defaults until the first configure call.
    pub fn thresholds(&self) -> Thresholds {
        *self
            .thresholds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the stored thresholds completely.
    pub fn replace_thresholds(&self, thresholds: Thresholds) {
        *self
            .thresholds
            .write()
            .unwrap_or_else(PoisonError::into_inner) = thresholds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn fresh_store_returns_sentinel_reading_and_default_thresholds() {
        let store = StateStore::new();

        let reading = store.reading();
        assert_eq!(reading.temperature, 0.0);
        assert_eq!(reading.humidity, 0.0);

        let thresholds = store.thresholds();
        assert_eq!(thresholds.temp_min, 18.0);
        assert_eq!(thresholds.temp_max, 28.0);
        assert_eq!(thresholds.hum_min, 30.0);
        assert_eq!(thresholds.hum_max, 60.0);
    }

    #[test]
    fn replace_reading_is_last_write_wins() {
        let store = StateStore::new();

        store.replace_reading(Reading {
            temperature: 21.0,
            humidity: 50.0,
        });
        store.replace_reading(Reading {
            temperature: 22.5,
            humidity: 45.0,
        });

        let reading = store.reading();
        assert_eq!(reading.temperature, 22.5);
        assert_eq!(reading.humidity, 45.0);
    }

    #[test]
    fn thresholds_round_trip() {
        let store = StateStore::new();
        let configured = Thresholds {
            temp_min: 15.0,
            temp_max: 25.0,
            hum_min: 20.0,
            hum_max: 70.0,
        };

        store.replace_thresholds(configured);
        assert_eq!(store.thresholds(), configured);
    }

    #[test]
    fn records_are_independent() {
        let store = StateStore::new();
        let reading_before = store.reading();

        store.replace_thresholds(Thresholds {
            temp_min: -5.0,
            temp_max: 5.0,
            hum_min: 10.0,
            hum_max: 90.0,
        });
        assert_eq!(store.reading(), reading_before);

        let thresholds_before = store.thresholds();
        store.replace_reading(Reading {
            temperature: 30.0,
            humidity: 55.0,
        });
        assert_eq!(store.thresholds(), thresholds_before);
    }

    #[test]
    fn concurrent_reads_never_observe_torn_readings() {
        let store = Arc::new(StateStore::new());

        // Every write keeps humidity = -temperature, so any torn read
        // (fields from two different writes) breaks the invariant. The
        // sentinel (0, 0) satisfies it too.
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..10_000 {
                    let t = f64::from(i);
                    store.replace_reading(Reading {
                        temperature: t,
                        humidity: -t,
                    });
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..10_000 {
                        let reading = store.reading();
                        assert_eq!(reading.humidity, -reading.temperature);
                    }
                })
            })
            .collect();

        writer.join().expect("writer thread panicked");
        for reader in readers {
            reader.join().expect("reader thread panicked");
        }
    }
}
