use super::error::DomainError;
use super::tfn::Tfn;

/// Square matrix of fuzzy pairwise judgments, stored row-major.
///
/// Entry (i, j) reads "importance of item i relative to item j".
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    size: usize,
    entries: Vec<Tfn>,
}

impl PairwiseMatrix {
    /// Build from rows. Fails if there are no rows or any row length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<Tfn>>) -> Result<Self, DomainError> {
        let size = rows.len();
        if size == 0 {
            return Err(DomainError::EmptyMatrix);
        }
        let mut entries = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(DomainError::NotSquare {
                    row,
                    found: values.len(),
                    expected: size,
                });
            }
            entries.extend(values);
        }
        Ok(Self { size, entries })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Tfn {
        self.entries[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[Tfn] {
        &self.entries[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tfn]> {
        self.entries.chunks(self.size)
    }

    /// Crisp matrix of the modal (middle) components.
    pub fn modal_values(&self) -> Vec<Vec<f64>> {
        self.rows()
            .map(|row| row.iter().map(Tfn::modal).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_empty() {
        assert_eq!(
            PairwiseMatrix::from_rows(vec![]),
            Err(DomainError::EmptyMatrix)
        );
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = PairwiseMatrix::from_rows(vec![
            vec![Tfn::EQUAL, Tfn::EQUAL],
            vec![Tfn::EQUAL],
        ]);
        assert_eq!(
            result,
            Err(DomainError::NotSquare {
                row: 1,
                found: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_indexing_and_modal() {
        let m = PairwiseMatrix::from_rows(vec![
            vec![Tfn::EQUAL, Tfn::STRONG],
            vec![Tfn::STRONG.reciprocal(), Tfn::EQUAL],
        ])
        .unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.get(0, 1), Tfn::STRONG);
        assert_eq!(m.row(1).len(), 2);
        assert_eq!(m.rows().count(), 2);

        let modal = m.modal_values();
        assert_eq!(modal[0], vec![1.0, 5.0]);
        assert!((modal[1][0] - 0.2).abs() < 1e-12);
    }
}
