//! Caller-owned memoization around `compute_chart`.
//!
//! Charts are referentially transparent in (birth input, config) for a fixed
//! table, so a cache is a plain map owned by whoever holds the table. The map
//! is bounded: once full, the oldest entry is dropped to make room.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use saju_time::SolarTermTable;

use crate::chart::compute_chart;
use crate::chart_types::{BirthInput, Chart, ChartConfig};
use crate::error::ChartError;

/// Hit/miss counters of a [`PillarCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub evaluations: u32,
    pub cache_hits: u32,
}

/// Entries kept by [`PillarCache::new`].
pub const DEFAULT_CACHE_LIMIT: usize = 4096;

type CacheKey = (BirthInput, ChartConfig);

/// Memoizes charts for one solar term table.
#[derive(Debug)]
pub struct PillarCache<'t> {
    table: &'t SolarTermTable,
    charts: HashMap<CacheKey, Chart>,
    /// Insertion order, oldest first.
    order: VecDeque<CacheKey>,
    limit: usize,
    stats: CacheStats,
}

impl<'t> PillarCache<'t> {
    pub fn new(table: &'t SolarTermTable) -> Self {
        Self::with_limit(table, DEFAULT_CACHE_LIMIT)
    }

    /// Cache holding at most `limit` charts (at least one).
    pub fn with_limit(table: &'t SolarTermTable, limit: usize) -> Self {
        Self {
            table,
            charts: HashMap::new(),
            order: VecDeque::new(),
            limit: limit.max(1),
            stats: CacheStats::default(),
        }
    }

    /// Chart for `input`, computed at most once per (input, config) while
    /// the entry stays cached.
    ///
    /// Errors are not cached.
    pub fn chart(&mut self, input: &BirthInput, config: &ChartConfig) -> Result<&Chart, ChartError> {
        let key = (*input, *config);
        if !self.charts.contains_key(&key) {
            self.make_room();
        }
        match self.charts.entry(key) {
            Entry::Occupied(cached) => {
                self.stats.cache_hits += 1;
                Ok(cached.into_mut())
            }
            Entry::Vacant(slot) => {
                let chart = compute_chart(self.table, input, config)?;
                self.stats.evaluations += 1;
                self.order.push_back(key);
                Ok(slot.insert(chart))
            }
        }
    }

    fn make_room(&mut self) {
        while self.charts.len() >= self.limit {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.charts.remove(&oldest);
            tracing::trace!(remaining = self.charts.len(), "evicted cached chart");
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn clear(&mut self) {
        self.charts.clear();
        self.order.clear();
    }
}
