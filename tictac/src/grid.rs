
use super::cell::Cell;
use super::player::PlayerId;
use super::point::Point;

use utils::error::Context;
use utils::notate::Notate;
use utils::*;

///
/// The side length of the grid.
///
pub const SIZE : usize = 3;

///
/// Every winning line as (column, row) triples, in the order they are checked:
/// the three rows, then the three columns, then the two diagonals.
///
const LINES : [[(usize, usize); 3]; 8] = 
[
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],

    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],

    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)]
];

///
/// The 3x3 playing field, indexed `[column][row]`.
///
/// Only the round engine places marks on a grid; everybody else gets a shared 
/// reference or a copy.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid 
{
    cells: [[Cell; SIZE]; SIZE]
}

impl notate::Notate for Grid 
{
    fn notate (& self) -> String 
    {
        (0 .. SIZE)
            .map(|row| (0 .. SIZE).map(|column| self.cells[column][row].notate()).collect::<Vec<String>>().join(","))
            .collect::<Vec<String>>()
            .join("/")
    }

    fn parse (s: & str) -> Result<Grid>
    {
        let context = format!("Invalid notation '{}' for grid.", s);

        let rows = s.trim().split('/').collect::<Vec<& str>>();
        if rows.len() != SIZE 
        {
            return Err(error::error!("Expected {} rows, found {}.", SIZE, rows.len())).context(context.clone());
        }

        let mut grid = Grid::empty();
        for (row, line) in rows.iter().enumerate()
        {
            let tokens = line.split(',').collect::<Vec<& str>>();
            if tokens.len() != SIZE 
            {
                return Err(error::error!("Expected {} cells in row {}, found {}.", SIZE, row, tokens.len())).context(context.clone());
            }

            for (column, token) in tokens.iter().enumerate()
            {
                grid.cells[column][row] = Cell::parse(token).context(context.clone())?;
            }
        }

        Ok(grid)
    }
}

impl std::fmt::Display for Grid 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        for row in 0 .. SIZE 
        {
            for column in 0 .. SIZE 
            {
                write!(f, "{}", self.cells[column][row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid 
{
    ///
    /// Returns an all-empty grid.
    ///
    pub fn empty () -> Grid 
    {
        Grid { cells: [[Cell::Empty; SIZE]; SIZE] }
    }

    ///
    /// Returns the cell at the given point, or nothing if the point is off the grid.
    ///
    pub fn get (& self, point: Point) -> Option<Cell>
    {
        match point.in_bounds()
        {
            true  => Some(self.cells[point.column() as usize][point.row() as usize]),
            false => None 
        }
    }

    ///
    /// Returns the raw cells, indexed `[column][row]`.
    ///
    pub fn cells (& self) -> & [[Cell; SIZE]; SIZE]
    {
        & self.cells
    }

    ///
    /// Counts the cells nobody holds yet.
    ///
    pub fn empty_cells (& self) -> usize 
    {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    ///
    /// Determines whether every cell is taken.
    ///
    pub fn is_full (& self) -> bool 
    {
        self.empty_cells() == 0
    }

    ///
    /// Marks the cell at an on-grid point for a player. The caller has already checked 
    /// that the point is on the grid and the cell is empty.
    ///
    pub(crate) fn place (& mut self, point: Point, player: PlayerId)
    {
        self.cells[point.column() as usize][point.row() as usize] = Cell::Taken(player);
    }

    ///
    /// Returns the player owning a complete line, scanning rows, then columns, then 
    /// diagonals, and stopping at the first complete one.
    ///
    pub fn winner (& self) -> Option<PlayerId>
    {
        LINES.iter().find_map(|line| 
        {
            let [a, b, c] = line.map(|(column, row)| self.cells[column][row]);
            match a 
            {
                Cell::Taken(id) if a == b && a == c => Some(id),
                _                                   => None 
            }
        })
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    fn grid (s: & str) -> Grid 
    {
        Grid::parse(s).unwrap()
    }

    #[test]
    fn every_line_wins_for_its_owner ()
    {
        let one = PlayerId::FIRST;
        let two = PlayerId::SECOND;

        for line in & LINES 
        {
            let mut g = Grid::empty();
            line.iter().for_each(|& (c, r)| g.place(Point::new(c as i32, r as i32), one));

            // Scatter the other player over cells off the line without completing anything.

            let mut placed = 0;
            for point in Point::all()
            {
                if placed < 2 && g.get(point) == Some(Cell::Empty)
                {
                    g.place(point, two);
                    placed += 1;
                }
            }

            assert_eq!(g.winner(), Some(one), "line {:?} on\n{}", line, g);
        }
    }

    #[test]
    fn no_complete_line_means_no_winner ()
    {
        assert_eq!(Grid::empty().winner(), None);
        assert_eq!(grid("1,2,1/1,2,2/2,1,1").winner(), None);
        assert_eq!(grid("1,1,-/2,2,-/-,-,-").winner(), None);
    }

    #[test]
    fn centre_alone_does_not_complete_a_diagonal ()
    {
        assert_eq!(grid("1,-,-/-,1,-/-,-,2").winner(), None);
        assert_eq!(grid("-,-,2/-,2,-/1,-,-").winner(), None);
        assert_eq!(grid("-,-,2/-,2,-/2,-,1").winner(), Some(PlayerId::SECOND));
    }

    #[test]
    fn first_complete_line_in_scan_order_wins ()
    {
        // Two complete rows cannot happen in play, but they pin the scan order.

        assert_eq!(grid("2,2,2/-,-,-/1,1,1").winner(), Some(PlayerId::SECOND));
        assert_eq!(grid("1,-,2/1,-,2/1,-,2").winner(), Some(PlayerId::FIRST));
    }

    #[test]
    fn notation_is_row_major_over_column_indexed_cells ()
    {
        let g = grid("1,-,2/-,-,-/-,-,-");
        assert_eq!(g.get(Point::new(0, 0)), Some(Cell::Taken(PlayerId::FIRST)));
        assert_eq!(g.get(Point::new(2, 0)), Some(Cell::Taken(PlayerId::SECOND)));
        assert_eq!(g.cells()[2][0], Cell::Taken(PlayerId::SECOND));
        assert_eq!(g.notate(), "1,-,2/-,-,-/-,-,-");
        assert_eq!(g.empty_cells(), 7);

        assert!(Grid::parse("1,-,2/-,-,-").is_err());
        assert!(Grid::parse("1,-/-,-,-/-,-,-").is_err());
        assert!(Grid::parse("1,0,-/-,-,-/-,-,-").is_err());
    }

    #[test]
    fn display_draws_rows_top_to_bottom ()
    {
        assert_eq!(grid("1,-,-/-,2,-/-,-,-").to_string(), "⭕⬛⬛\n⬛❌⬛\n⬛⬛⬛\n");
        assert!(! grid("1,1,1/2,2,-/-,-,-").is_full());
        assert!(grid("1,2,1/1,2,2/2,1,1").is_full());
    }
}
