pub mod client;
pub mod decode;
pub mod endpoints;
pub mod request;

use crate::error::FetchError;
use crate::model::ranks::RankTable;
use crate::model::scores::ScoreMap;
use crate::model::series::TimeSeries;
use crate::model::team::TeamId;
use request::{OprQuery, Season};

pub trait StatsApi {
    fn epa_history(&self, season: Season, team: &TeamId) -> Result<TimeSeries, FetchError>;

    fn epa_at(&self, season: Season, team: &TeamId, time: f64) -> Result<f64, FetchError>;

    fn epa_ranks(&self, season: Season) -> Result<RankTable, FetchError>;

    fn opr(&self, query: &OprQuery) -> Result<ScoreMap, FetchError>;
}
