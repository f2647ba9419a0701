use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use mockledger_core::DatasetConfig;

use crate::base::{BaseTable, Row, generate_base_table};
use crate::errors::GenerationError;
use crate::palette::Palette;
use crate::replicate::replicate;

/// Immutable inputs shared by every generation phase.
#[derive(Debug, Clone)]
pub struct GeneratorContext<'a> {
    config: &'a DatasetConfig,
    palette: Palette,
    start_date: NaiveDate,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(config: &'a DatasetConfig, start_date: NaiveDate) -> Result<Self, GenerationError> {
        let palette = Palette::build(config.schema(), start_date)?;
        debug!(pools = palette.len(), start_date = %start_date, "palette built");
        Ok(Self {
            config,
            palette,
            start_date,
        })
    }

    pub fn config(&self) -> &DatasetConfig {
        self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn base_table(&self, rng: &mut impl Rng) -> Result<BaseTable, GenerationError> {
        generate_base_table(
            self.config.schema(),
            &self.palette,
            self.config.base_size,
            rng,
        )
    }

    pub fn replicate(
        &self,
        base: &BaseTable,
        offset: u64,
        rng: &mut impl Rng,
    ) -> Result<Vec<Row>, GenerationError> {
        replicate(
            base,
            self.config.schema(),
            &self.palette,
            offset,
            self.config.money_drift_bound,
            rng,
        )
    }

    pub fn into_palette(self) -> Palette {
        self.palette
    }
}

/// Period 0 followed by every replica in ascending offset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    rows: Vec<Row>,
    period_len: usize,
    periods: u64,
}

impl ResultSet {
    fn from_base(base: BaseTable) -> Self {
        let period_len = base.len();
        Self {
            rows: base.into_rows(),
            period_len,
            periods: 1,
        }
    }

    fn push_period(&mut self, rows: Vec<Row>) {
        self.rows.extend(rows);
        self.periods += 1;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of periods, base day included.
    pub fn periods(&self) -> u64 {
        self.periods
    }

    pub fn period_len(&self) -> usize {
        self.period_len
    }

    /// Rows of one period; 0 is the base day.
    pub fn period(&self, offset: u64) -> Option<&[Row]> {
        if offset >= self.periods {
            return None;
        }
        let start = usize::try_from(offset).ok()?.checked_mul(self.period_len)?;
        self.rows.get(start..start + self.period_len)
    }
}

/// Palette plus the assembled rows of a run.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub seed: u64,
    pub start_date: NaiveDate,
    pub palette: Palette,
    pub result: ResultSet,
}

/// Generate every period for `config` and concatenate them.
///
/// The base day and each replica draw from their own RNG stream derived from
/// `seed`, so a replica depends only on the base table and its offset.
pub fn assemble_dataset(
    config: &DatasetConfig,
    start_date: NaiveDate,
    seed: u64,
) -> Result<Dataset, GenerationError> {
    let context = GeneratorContext::new(config, start_date)?;

    let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "base"));
    let base = context.base_table(&mut rng)?;
    debug!(rows = base.len(), "base table generated");

    let mut result = ResultSet::from_base(base.clone());
    for offset in 1..=config.replication_count {
        let mut rng = ChaCha8Rng::seed_from_u64(period_seed(seed, offset));
        let replica = context.replicate(&base, offset, &mut rng)?;
        debug!(offset, rows = replica.len(), "replica generated");
        result.push_period(replica);
    }

    Ok(Dataset {
        seed,
        start_date,
        palette: context.into_palette(),
        result,
    })
}

pub(crate) fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

fn period_seed(seed: u64, offset: u64) -> u64 {
    hash_seed(seed, &format!("period:{offset}"))
}
