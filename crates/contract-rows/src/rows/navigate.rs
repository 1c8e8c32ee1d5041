//! Generic operations over the row tree.

use super::row::Row;

/// Depth-first search for a row by identity across the forest.
///
/// Returns the first match, or `None` when no row anywhere in the tree
/// (nested `properties` included) carries `row_id`.
pub fn find_row(row_id: u64, rows: &[Row]) -> Option<&Row> {
    for row in rows {
        if row.row_id == Some(row_id) {
            return Some(row);
        }
        if let Some(children) = &row.properties {
            if let Some(found) = find_row(row_id, children) {
                return Some(found);
            }
        }
    }
    None
}

/// The immediate parent of the row matching `child.row_id`.
///
/// `None` means the row sits at the root level (or is not in the tree
/// at all) - a normal outcome, not an error.
pub fn find_parent<'a>(tree: &'a [Row], child: &Row) -> Option<&'a Row> {
    let row_id = child.row_id?;
    for row in tree {
        if let Some(children) = &row.properties {
            if children.iter().any(|c| c.row_id == Some(row_id)) {
                return Some(row);
            }
            if let Some(found) = find_parent(children, child) {
                return Some(found);
            }
        }
    }
    None
}

/// The name chain from the root down to the row with `row_id`,
/// inclusive. `None` when the row is absent.
pub(crate) fn find_path(rows: &[Row], row_id: u64) -> Option<Vec<String>> {
    for row in rows {
        if row.row_id == Some(row_id) {
            return Some(vec![row.name.clone()]);
        }
        if let Some(children) = &row.properties {
            if let Some(mut path) = find_path(children, row_id) {
                path.insert(0, row.name.clone());
                return Some(path);
            }
        }
    }
    None
}
