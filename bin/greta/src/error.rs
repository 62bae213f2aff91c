use std::fmt;

#[derive(Debug)]
pub enum Error {
    Influx(influx::Error),
    Meteo(meteo::Error),
}

impl From<influx::Error> for Error {
    fn from(err: influx::Error) -> Self {
        Self::Influx(err)
    }
}

impl From<meteo::Error> for Error {
    fn from(err: meteo::Error) -> Self {
        Self::Meteo(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Influx(err) => write!(f, "influx error: {err}"),
            Self::Meteo(err) => write!(f, "station error: {err}"),
        }
    }
}

impl std::error::Error for Error {}
