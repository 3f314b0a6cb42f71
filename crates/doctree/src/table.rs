//! Read-only queries over table subtrees.
//!
//! Tables have a fixed shape (`Table` → `TableHeader`/`TableBody` →
//! `TableRow` → `TableCell`), so row iteration flattens one level of
//! grandchildren. Rows are not guaranteed uniform width: the column count is
//! the maximum width over all rows.

use crate::{Element, NodeId, Tree, TreeError};

impl Tree {
    /// Lazy iterator over the rows of a table, header row first.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TypeMismatch`] if `id` is not a [`Element::Table`].
    pub fn table_rows(
        &self,
        id: NodeId,
    ) -> Result<impl Iterator<Item = NodeId> + '_, TreeError> {
        self.expect_table(id)?;
        Ok(self
            .children(id)
            .iter()
            .flat_map(move |&section| self.children(section).iter().copied())
            .filter(move |&row| matches!(self.element(row), Element::TableRow)))
    }

    /// Row count and maximum row width of a table, as `(rows, columns)`.
    ///
    /// Scans every row's cells, O(rows × cols).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::TypeMismatch`] if `id` is not a [`Element::Table`].
    pub fn table_size(&self, id: NodeId) -> Result<(usize, usize), TreeError> {
        let mut rows = 0;
        let mut columns = 0;
        for row in self.table_rows(id)? {
            rows += 1;
            columns = columns.max(self.children(row).len());
        }
        Ok((rows, columns))
    }

    /// Size of a table along one dimension: `dim = 1` is the row count
    /// (O(rows)), `dim = 2` the maximum row width (O(rows × cols)).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::RangeError`] for any other `dim`, and
    /// [`TreeError::TypeMismatch`] if `id` is not a [`Element::Table`].
    pub fn table_size_dim(&self, id: NodeId, dim: usize) -> Result<usize, TreeError> {
        match dim {
            1 => Ok(self.table_rows(id)?.count()),
            2 => Ok(self.table_size(id)?.1),
            _ => Err(TreeError::RangeError { dim }),
        }
    }

    fn expect_table(&self, id: NodeId) -> Result<(), TreeError> {
        match self.element(id) {
            Element::Table => Ok(()),
            other => Err(TreeError::type_mismatch("Table", other)),
        }
    }
}
