//! One-call solving: build a bounded graph, then search it.

use std::fmt;

use npuzzle_core::{Board, Dims};

use crate::graph::StateGraph;

/// Errors that can occur when solving between two boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The two boards have different shapes.
    DimsMismatch { source: Dims, destination: Dims },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimsMismatch {
                source,
                destination,
            } => write!(f, "board shapes differ: {source} vs {destination}"),
        }
    }
}

impl std::error::Error for SolveError {}

/// The minimum-length slide sequence from `source` to `destination`, both
/// boards included, or `Ok(None)` if the destination is unreachable.
///
/// Builds a fresh bounded graph per call; callers issuing many queries
/// against one source should keep a [`StateGraph`] built with
/// [`build_all`](StateGraph::build_all) instead.
pub fn solve(source: &Board, destination: &Board) -> Result<Option<Vec<Board>>, SolveError> {
    if source.dims() != destination.dims() {
        return Err(SolveError::DimsMismatch {
            source: source.dims(),
            destination: destination.dims(),
        });
    }
    let mut graph = StateGraph::new(source.dims());
    let (src, dst) = graph.build_until(source, destination);
    match dst {
        Some(dst) => Ok(graph.shortest_path(src, dst)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u16]]) -> Board {
        Board::from_values(rows).unwrap()
    }

    #[test]
    fn one_move_solve_on_3x3() {
        let solved = Board::solved(Dims::new(3, 3));
        let one_move = board(&[&[1, 2, 3], &[4, 5, 0], &[7, 8, 6]]);
        let path = solve(&solved, &one_move).unwrap().unwrap();
        assert_eq!(path, vec![solved, one_move]);
    }

    #[test]
    fn opposite_parity_3x3_is_unreachable() {
        // Swapping "1" and "2" flips the parity class, so the whole solvable
        // component gets exhausted without finding the destination.
        let solved = Board::solved(Dims::new(3, 3));
        let swapped = board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(solve(&solved, &swapped).unwrap(), None);
        assert!(!solved.solvable_from(&swapped));
    }

    #[test]
    fn mismatched_shapes_are_an_error() {
        let a = Board::solved(Dims::new(2, 2));
        let b = Board::solved(Dims::new(3, 2));
        assert_eq!(
            solve(&a, &b),
            Err(SolveError::DimsMismatch {
                source: Dims::new(2, 2),
                destination: Dims::new(3, 2),
            })
        );
    }

    #[test]
    fn degenerate_1x1_reports_unreachable_other_states() {
        let dims = Dims::new(1, 1);
        let only = Board::solved(dims);
        // The single state is trivially reachable from itself.
        assert_eq!(solve(&only, &only).unwrap().unwrap().len(), 1);
    }

    #[test]
    fn longer_solve_round_trips_through_decode() {
        // Feed the solver boards that came in through the compact encoding.
        let dims = Dims::new(3, 2);
        let solved = Board::solved(dims);
        let code = npuzzle_core::encode(&solved).unwrap();
        let decoded = npuzzle_core::decode(code, dims).unwrap();
        let dest = board(&[&[4, 1, 2], &[0, 5, 3]]);
        let path = solve(&decoded, &dest).unwrap().unwrap();
        assert!(path.len() > 1);
        assert_eq!(path.first().unwrap(), &solved);
        assert_eq!(path.last().unwrap(), &dest);
    }
}
