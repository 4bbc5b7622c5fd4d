
use super::error::GameError;
use super::grid::SIZE;

use utils::error::Context;
use utils::*;

///
/// A grid coordinate, addressed as (column, row) with the origin at the top left.
///
/// A point may lie outside the grid; `in_bounds` and `checked` tell the two apart.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point 
{
    column: i32,
    row: i32
}

impl std::fmt::Display for Point 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "({},{})", self.column, self.row)
    }
}

impl notate::Notate for Point 
{
    fn notate (& self) -> String 
    {
        format!("{},{}", self.column, self.row)
    }

    fn parse (s: & str) -> Result<Point>
    {
        let context = format!("Invalid notation '{}' for point.", s);

        let parts = s.split(',').map(|p| p.trim()).collect::<Vec<& str>>();
        if parts.len() != 2
        {
            return Err(error::error!("Expected 'column,row', found {} component(s).", parts.len())).context(context.clone());
        }

        let column = parts[0].parse::<i32>().context(context.clone())?;
        let row = parts[1].parse::<i32>().context(context.clone())?;

        Ok(Point::checked(column, row).context(context.clone())?)
    }
}

impl Point 
{
    ///
    /// Returns every point on the grid, column by column.
    ///
    pub fn all () -> impl Iterator<Item = Point>
    {
        (0 .. SIZE as i32).flat_map(|column| (0 .. SIZE as i32).map(move |row| Point::new(column, row)))
    }

    ///
    /// Returns the point, provided it lies on the grid.
    ///
    pub fn checked (column: i32, row: i32) -> std::result::Result<Point, GameError>
    {
        let point = Point::new(column, row);
        match point.in_bounds()
        {
            true  => Ok(point),
            false => Err(GameError::OutOfRange { column, row })
        }
    }

    pub fn column (& self) -> i32 
    {
        self.column
    }

    ///
    /// Maps a position on a drawable surface of the given size to the cell drawn under it.
    /// Positions off the surface, or a degenerate surface, map to nothing.
    ///
    pub fn from_surface (x: f32, y: f32, width: f32, height: f32) -> Option<Point>
    {
        if ! (width > 0.0 && height > 0.0)
        {
            return None;
        }
        if ! (0.0 <= x && x < width && 0.0 <= y && y < height)
        {
            return None;
        }

        let column = ((x / width) * SIZE as f32).floor() as i32;
        let row = ((y / height) * SIZE as f32).floor() as i32;

        Some(Point::new(column.min(SIZE as i32 - 1), row.min(SIZE as i32 - 1)))
    }

    ///
    /// Determines whether this point is on the grid.
    ///
    pub fn in_bounds (& self) -> bool 
    {
        0 <= self.column && self.column < SIZE as i32 && 0 <= self.row && self.row < SIZE as i32
    }

    ///
    /// Returns a new point.
    ///
    pub fn new (column: i32, row: i32) -> Point 
    {
        Point { column, row }
    }

    pub fn row (& self) -> i32 
    {
        self.row
    }
}

#[cfg(test)]
mod tests 
{
    use utils::notate::Notate;

    use super::*;

    #[test]
    fn bounds ()
    {
        assert!(Point::new(0, 0).in_bounds());
        assert!(Point::new(2, 2).in_bounds());
        assert!(! Point::new(3, 0).in_bounds());
        assert!(! Point::new(0, -1).in_bounds());

        assert_eq!(Point::checked(1, 3), Err(GameError::OutOfRange { column: 1, row: 3 }));
        assert_eq!(Point::all().count(), 9);
    }

    #[test]
    fn surface_positions_map_to_thirds ()
    {
        assert_eq!(Point::from_surface(0.0, 0.0, 300.0, 300.0), Some(Point::new(0, 0)));
        assert_eq!(Point::from_surface(150.0, 299.9, 300.0, 300.0), Some(Point::new(1, 2)));
        assert_eq!(Point::from_surface(99.9, 100.0, 300.0, 300.0), Some(Point::new(0, 1)));
        assert_eq!(Point::from_surface(50.0, 10.0, 60.0, 30.0), Some(Point::new(2, 1)));

        assert_eq!(Point::from_surface(300.0, 10.0, 300.0, 300.0), None);
        assert_eq!(Point::from_surface(-1.0, 10.0, 300.0, 300.0), None);
        assert_eq!(Point::from_surface(1.0, 1.0, 0.0, 300.0), None);
    }

    #[test]
    fn notation ()
    {
        assert_eq!(Point::parse(" 2, 1").unwrap(), Point::new(2, 1));
        assert_eq!(Point::new(0, 2).notate(), "0,2");
        assert!(Point::parse("1").is_err());
        assert!(Point::parse("1,5").is_err());
    }
}
