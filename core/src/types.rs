/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// The 3x3 block around `center`, clipped to a `(rows, cols)` board and
/// without `center` itself. Yields nothing when `center` is off the board.
pub fn neighbors(center: Coord2, (rows, cols): Coord2) -> impl Iterator<Item = Coord2> + Clone {
    let (row, col) = center;
    let on_board = row < rows && col < cols;

    let row_span = row.saturating_sub(1)..=row.saturating_add(1).min(rows.saturating_sub(1));
    let col_span = col.saturating_sub(1)..=col.saturating_add(1).min(cols.saturating_sub(1));

    on_board
        .then_some(row_span)
        .into_iter()
        .flatten()
        .flat_map(move |r| col_span.clone().map(move |c| (r, c)))
        .filter(move |&coords| coords != center)
}

/// True when `a` lies in the 3x3 block centered on `b`.
pub fn within_one(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}
