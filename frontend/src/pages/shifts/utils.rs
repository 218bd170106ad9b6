use crate::api::ShiftRecord;
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 10;
pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar la lista de registros de turno.";
pub const PDF_FALLBACK_MESSAGE: &str = "No se pudo descargar el PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Nombre,
    Tipo,
    Fecha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Fecha,
            dir: SortDir::Desc,
        }
    }
}

impl SortState {
    /// Same key flips direction; a new key starts descending for dates and ascending otherwise.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            let dir = match self.dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::Asc,
            };
            return Self { key, dir };
        }
        let dir = if key == SortKey::Fecha {
            SortDir::Desc
        } else {
            SortDir::Asc
        };
        Self { key, dir }
    }

    pub fn indicator(&self, key: SortKey) -> &'static str {
        match (self.key == key, self.dir) {
            (false, _) => "",
            (true, SortDir::Asc) => " ▲",
            (true, SortDir::Desc) => " ▼",
        }
    }
}

/// Matches employee id, employee name or record type.
pub fn filter_records(records: &[ShiftRecord], query: &str) -> Vec<ShiftRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            record
                .owner_id()
                .map(|id| id.to_string().contains(&needle))
                .unwrap_or(false)
                || record.owner_name().to_lowercase().contains(&needle)
                || record.kind_key().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

fn compare(a: &ShiftRecord, b: &ShiftRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.owner_id().cmp(&b.owner_id()),
        SortKey::Nombre => a
            .owner_name()
            .to_lowercase()
            .cmp(&b.owner_name().to_lowercase()),
        SortKey::Tipo => a.kind_key().cmp(b.kind_key()),
        SortKey::Fecha => a.timestamp().cmp(&b.timestamp()),
    }
}

/// Stable: records that compare equal keep their server order.
pub fn sort_records(records: &mut [ShiftRecord], sort: SortState) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, sort.key);
        match sort.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::ShiftKind, test_support::helpers::shift_record};

    fn sample() -> Vec<ShiftRecord> {
        vec![
            shift_record(1, 10, ShiftKind::Salida, "2024-01-02T08:00:00"),
            shift_record(2, 20, ShiftKind::Entrada, "2024-01-01T08:00:00"),
        ]
    }

    fn ids(records: &[ShiftRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn date_sort_respects_direction() {
        let mut records = sample();
        sort_records(&mut records, SortState::default());
        assert_eq!(ids(&records), vec![1, 2]);

        let asc = SortState::default().toggle(SortKey::Fecha);
        assert_eq!(asc.dir, SortDir::Asc);
        sort_records(&mut records, asc);
        assert_eq!(ids(&records), vec![2, 1]);
    }

    #[test]
    fn new_key_defaults() {
        let by_type = SortState::default().toggle(SortKey::Tipo);
        assert_eq!(by_type, SortState { key: SortKey::Tipo, dir: SortDir::Asc });
        let back_to_date = by_type.toggle(SortKey::Fecha);
        assert_eq!(back_to_date.dir, SortDir::Desc);
        assert_eq!(back_to_date.indicator(SortKey::Fecha), " ▼");
        assert_eq!(back_to_date.indicator(SortKey::Id), "");
    }

    #[test]
    fn type_and_owner_sorts() {
        let mut records = sample();
        sort_records(&mut records, SortState { key: SortKey::Tipo, dir: SortDir::Asc });
        assert_eq!(ids(&records), vec![2, 1]);
        sort_records(&mut records, SortState { key: SortKey::Id, dir: SortDir::Desc });
        assert_eq!(ids(&records), vec![2, 1]);
    }

    #[test]
    fn search_covers_id_name_and_type() {
        let mut records = sample();
        records[1].employee.as_mut().unwrap().nombre = Some("Pedro".into());
        assert_eq!(ids(&filter_records(&records, "20")), vec![2]);
        assert_eq!(ids(&filter_records(&records, "pedro")), vec![2]);
        assert_eq!(ids(&filter_records(&records, "salida")), vec![1]);
        assert_eq!(filter_records(&records, "").len(), 2);
    }

    #[test]
    fn unparseable_dates_sort_first_ascending() {
        let mut records = sample();
        records.push(shift_record(3, 30, ShiftKind::Entrada, "sin fecha"));
        sort_records(&mut records, SortState { key: SortKey::Fecha, dir: SortDir::Asc });
        assert_eq!(ids(&records), vec![3, 2, 1]);
    }

    #[test]
    fn unknown_type_sorts_first_and_never_matches_a_type_search() {
        let mut records = sample();
        let mut unknown = shift_record(3, 30, ShiftKind::Entrada, "2024-01-03T08:00:00");
        unknown.tipo = None;
        records.push(unknown);
        sort_records(&mut records, SortState { key: SortKey::Tipo, dir: SortDir::Asc });
        assert_eq!(ids(&records), vec![3, 2, 1]);
        assert_eq!(ids(&filter_records(&records, "entrada")), vec![2]);
    }
}
