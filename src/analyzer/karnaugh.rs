/// Binary-reflected Gray code. `gray(0) = 0`, `gray(1) = 1`, `gray(2) = 3`.
pub fn gray(i: usize) -> usize {
    i ^ (i >> 1)
}

/// `gray(i)` as a zero-padded binary string of `width` digits.
/// A zero width gives the empty string.
pub fn gray_string(i: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    format!("{:0width$b}", gray(i), width = width)
}

/// A Karnaugh grid over a truth table's output column.
///
/// The first `⌊v/2⌋` variables index rows, the rest index columns. Both axes
/// run in Gray order so neighbouring cells differ in one variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KarnaughMap {
    row_variables: Vec<String>,
    column_variables: Vec<String>,
    cells: Vec<Vec<bool>>,
}

impl KarnaughMap {
    /// Returns `None` unless `outputs` has exactly `2^v` entries, or if
    /// `2^v` overflows.
    pub fn new(variables: &[String], outputs: &[bool]) -> Option<Self> {
        let vertical = variables.len() / 2;
        let horizontal = variables.len() - vertical;
        let rows = u32::try_from(variables.len())
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))?;
        if outputs.len() != rows {
            return None;
        }

        let cells = (0..1usize << vertical)
            .map(|row| {
                (0..1usize << horizontal)
                    .map(|column| outputs[Self::index(row, column, horizontal)])
                    .collect()
            })
            .collect();

        Some(Self {
            row_variables: variables[..vertical].to_vec(),
            column_variables: variables[vertical..].to_vec(),
            cells,
        })
    }

    fn index(row: usize, column: usize, horizontal: usize) -> usize {
        (gray(row) << horizontal) | gray(column)
    }

    /// Row of the truth table that cell `(row, column)` shows.
    pub fn output_index(&self, row: usize, column: usize) -> usize {
        Self::index(row, column, self.column_variables.len())
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<bool> {
        self.cells.get(row)?.get(column).copied()
    }

    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    pub fn row_variables(&self) -> &[String] {
        &self.row_variables
    }

    pub fn column_variables(&self) -> &[String] {
        &self.column_variables
    }

    pub fn row_label(&self, row: usize) -> String {
        gray_string(row, self.row_variables.len())
    }

    pub fn column_label(&self, column: usize) -> String {
        gray_string(column, self.column_variables.len())
    }

    pub fn corner_label(&self) -> String {
        format!(
            "{}\\{}",
            self.row_variables.concat(),
            self.column_variables.concat()
        )
    }

    /// A map over fewer than two variables is just the truth table again.
    pub fn is_displayable(&self) -> bool {
        self.row_variables.len() + self.column_variables.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn gray_sequence() {
        let codes: Vec<_> = (0..8).map(gray).collect();
        assert_eq!(codes, vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn gray_strings() {
        assert_eq!(gray_string(2, 2), "11");
        assert_eq!(gray_string(3, 3), "010");
        assert_eq!(gray_string(0, 0), "");
    }

    #[test]
    fn four_variable_layout() {
        let variables = names(&["A", "B", "C", "D"]);
        let outputs: Vec<bool> = (0..16).map(|i| i == 0b1101).collect();
        let map = KarnaughMap::new(&variables, &outputs).unwrap();

        assert_eq!(map.rows(), 4);
        assert_eq!(map.columns(), 4);
        assert_eq!(map.corner_label(), "AB\\CD");
        // AB=11 is row 2, CD=01 is column 1
        assert_eq!(map.row_label(2), "11");
        assert_eq!(map.column_label(1), "01");
        assert_eq!(map.cell(2, 1), Some(true));
        assert_eq!(map.output_index(2, 1), 0b1101);
        let ones = map.cells().iter().flatten().filter(|&&b| b).count();
        assert_eq!(ones, 1);
    }

    #[test]
    fn odd_count_puts_extra_variable_on_columns() {
        let variables = names(&["A", "B", "C"]);
        let outputs = vec![false; 8];
        let map = KarnaughMap::new(&variables, &outputs).unwrap();
        assert_eq!(map.row_variables(), &names(&["A"])[..]);
        assert_eq!(map.column_variables(), &names(&["B", "C"])[..]);
        assert_eq!((map.rows(), map.columns()), (2, 4));
    }

    #[test]
    fn small_maps_are_not_displayable() {
        let map = KarnaughMap::new(&names(&["A"]), &[false, true]).unwrap();
        assert!(!map.is_displayable());
        assert_eq!(map.cell(0, 1), Some(true));
        let map = KarnaughMap::new(&[], &[true]).unwrap();
        assert!(!map.is_displayable());
    }

    #[test]
    fn wrong_output_count() {
        assert!(KarnaughMap::new(&names(&["A", "B"]), &[true]).is_none());
    }

    #[test]
    fn too_many_variables_for_a_grid() {
        let variables: Vec<String> = (0..64).map(|i| format!("V{i}")).collect();
        assert!(KarnaughMap::new(&variables, &[true]).is_none());
    }
}
