use crate::SudokuGrid;
use crate::board::Board;
use crate::solver;

// The example Sudoku is taken from the World Puzzle Federation Sudoku Grand
// Prix: GP 2020 Round 8 (Puzzle 2)
// Puzzle: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf
// Solution: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8_SB.pdf

fn classic_puzzle() -> SudokuGrid {
    SudokuGrid::parse("\
         , , , ,8,1, , , ,\
         , ,2, , ,7,8, , ,\
         ,5,3, , , ,1,7, ,\
        3,7, , , , , , , ,\
        6, , , , , , , ,3,\
         , , , , , , ,2,4,\
         ,6,9, , , ,2,3, ,\
         , ,5,9, , ,4, , ,\
         , , ,6,5, , , , ").unwrap()
}

fn classic_solution() -> SudokuGrid {
    SudokuGrid::parse("\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1").unwrap()
}

#[test]
fn backtracking_solves_classic_sudoku() {
    let mut grid = classic_puzzle();

    assert!(solver::solve(&mut grid));
    assert_eq!(classic_solution(), grid, "Solver gave wrong grid.");
}

#[test]
fn board_solves_classic_sudoku() {
    let mut board = Board::new();
    board.show_grid(&classic_puzzle());

    assert_eq!(Ok(true), board.solve());
    assert_eq!(classic_solution(), board.to_grid().unwrap());
}
