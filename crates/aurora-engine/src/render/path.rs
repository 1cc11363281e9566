//! Closed outlines as path commands

use crate::math::Vec2;

/// One step of a path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic curve through `control` ending at `to`
    QuadTo { control: Vec2, to: Vec2 },
    Close,
}

/// A sequence of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Smooth closed curve through an outline.
    ///
    /// Each outline point becomes the control point of a quadratic segment
    /// ending halfway to the next point; the last segment wraps back to the
    /// first point the same way before closing.
    pub fn smooth_closed(points: &[Vec2]) -> Self {
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Self::default(),
        };

        let mut commands = Vec::with_capacity(points.len() + 2);
        commands.push(PathCommand::MoveTo(first));
        for pair in points.windows(2) {
            commands.push(PathCommand::QuadTo {
                control: pair[0],
                to: Vec2::midpoint(pair[0], pair[1]),
            });
        }
        commands.push(PathCommand::QuadTo {
            control: last,
            to: Vec2::midpoint(last, first),
        });
        commands.push(PathCommand::Close);

        Self { commands }
    }

    /// Closed polygon with straight edges
    pub fn polygon(points: &[Vec2]) -> Self {
        let mut iter = points.iter().copied();
        let first = match iter.next() {
            Some(p) => p,
            None => return Self::default(),
        };

        let mut commands = Vec::with_capacity(points.len() + 1);
        commands.push(PathCommand::MoveTo(first));
        commands.extend(iter.map(PathCommand::LineTo));
        commands.push(PathCommand::Close);

        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_smooth_closed_structure() {
        let path = Path::smooth_closed(&square());
        let cmds = path.commands();

        // move + one quad per edge (including the wrap) + close
        assert_eq!(cmds.len(), 6);
        assert_eq!(cmds[0], PathCommand::MoveTo(Vec2::new(0.0, 0.0)));
        assert_eq!(
            cmds[1],
            PathCommand::QuadTo {
                control: Vec2::new(0.0, 0.0),
                to: Vec2::new(5.0, 0.0),
            }
        );
        assert_eq!(
            cmds[4],
            PathCommand::QuadTo {
                control: Vec2::new(0.0, 10.0),
                to: Vec2::new(0.0, 5.0),
            }
        );
        assert_eq!(cmds[5], PathCommand::Close);
    }

    #[test]
    fn test_polygon_structure() {
        let path = Path::polygon(&square());
        let cmds = path.commands();
        assert_eq!(cmds.len(), 5);
        assert_eq!(cmds[3], PathCommand::LineTo(Vec2::new(0.0, 10.0)));
        assert_eq!(cmds[4], PathCommand::Close);
    }

    #[test]
    fn test_empty_outline_gives_empty_path() {
        assert!(Path::smooth_closed(&[]).is_empty());
        assert!(Path::polygon(&[]).is_empty());
    }
}
