use contracts::shared::selection::Selection;

/// Rows fetched for one selection. A lookup under any other selection misses.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCache<R> {
    key: Option<Selection>,
    rows: Vec<R>,
}

impl<R> Default for RowCache<R> {
    fn default() -> Self {
        Self {
            key: None,
            rows: Vec::new(),
        }
    }
}

impl<R> RowCache<R> {
    pub fn get(&self, selection: Selection) -> Option<&[R]> {
        (self.key == Some(selection)).then_some(self.rows.as_slice())
    }

    pub fn store(&mut self, selection: Selection, rows: Vec<R>) {
        self.key = Some(selection);
        self.rows = rows;
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(seller_id: i64, trade_id: i64) -> Selection {
        Selection {
            seller_id,
            trade_id,
        }
    }

    #[test]
    fn hit_only_for_same_selection() {
        let mut cache = RowCache::default();
        assert!(cache.get(sel(5, 12)).is_none());

        cache.store(sel(5, 12), vec![1, 2, 3]);
        assert_eq!(cache.get(sel(5, 12)), Some(&[1, 2, 3][..]));
        assert!(cache.get(sel(5, 13)).is_none());
    }

    #[test]
    fn invalidate_forces_miss() {
        let mut cache = RowCache::default();
        cache.store(sel(5, 12), vec!["row"]);
        cache.invalidate();
        assert_eq!(cache, RowCache::default());
        assert!(cache.get(sel(5, 12)).is_none());
    }
}
