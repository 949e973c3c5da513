//! Slow, straightforward reference implementations used to cross-check the
//! engine in tests.

use cephalopods_core::{Board, Count};

/// Returns every successor of `board` using row/column arithmetic and
/// recursive subset enumeration, independent of the adjacency table.
pub(crate) fn reference_successors(board: Board) -> Vec<Board> {
    let values = board.values();
    let mut successors = Vec::new();
    for target in 0..9 {
        if values[target] != 0 {
            continue;
        }
        let (row, col) = (target / 3, target % 3);
        let mut neighbors = Vec::new();
        if row > 0 {
            neighbors.push(target - 3);
        }
        if row < 2 {
            neighbors.push(target + 3);
        }
        if col > 0 {
            neighbors.push(target - 1);
        }
        if col < 2 {
            neighbors.push(target + 1);
        }
        neighbors.retain(|&n| values[n] != 0);

        let mut captures = Vec::new();
        collect_captures(&values, &neighbors, 0, &mut Vec::new(), &mut captures);
        if captures.is_empty() {
            let mut next = values;
            next[target] = 1;
            successors.push(Board::from_values(next).unwrap());
        }
        for captured in captures {
            let mut next = values;
            let sum: u8 = captured.iter().map(|&n| values[n]).sum();
            for n in captured {
                next[n] = 0;
            }
            next[target] = sum;
            successors.push(Board::from_values(next).unwrap());
        }
    }
    successors
}

fn collect_captures(
    values: &[u8; 9],
    neighbors: &[usize],
    start: usize,
    chosen: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    let sum: u8 = chosen.iter().map(|&n| values[n]).sum();
    if chosen.len() >= 2 && sum <= 6 {
        out.push(chosen.clone());
    }
    for i in start..neighbors.len() {
        chosen.push(neighbors[i]);
        collect_captures(values, neighbors, i + 1, chosen, out);
        chosen.pop();
    }
}

/// Walks the whole game tree without merging any boards and returns the
/// score of `board` searched to `depth` turns.
pub(crate) fn brute_force_score(board: Board, depth: u32) -> Count {
    if depth == 0 || board.is_full() {
        return Count::new(board.score());
    }
    reference_successors(board)
        .into_iter()
        .map(|successor| brute_force_score(successor, depth - 1))
        .sum()
}

#[test]
fn test_brute_force_known_answers() {
    assert_eq!(brute_force_score(Board::EMPTY, 1), Count::new(111_111_111));
    assert_eq!(
        brute_force_score("616 101 616".parse().unwrap(), 1),
        Count::new(264_239_762)
    );
    assert_eq!(brute_force_score(Board::EMPTY, 3), Count::new(840_352_818));
}
