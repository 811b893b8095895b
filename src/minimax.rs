use anyhow::{bail, Result};
use log::{debug, trace};

use crate::error::IllegalMove;
use crate::game::{Game, GameStatus, Move, Player};

/// Exhaustive minimax search. No pruning, depth limit or transposition
/// table: a 3x3 board bounds the tree at 9! positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct Minimax;

impl Minimax {
    pub fn new() -> Self {
        Self
    }

    /// Picks the move with the best guaranteed outcome for `player`.
    ///
    /// Candidates are tried in `legal_moves()` order and the first one with
    /// the maximal score wins ties, so the result is deterministic. The game
    /// is returned unchanged; the caller commits the move.
    pub fn best_move<G: Game>(&self, game: &mut G, player: Player) -> Result<Move> {
        let mut nodes = 0usize;
        let mut best: Option<(Move, i32)> = None;

        for mv in game.legal_moves() {
            let score = self.score_move(game, mv, player, &mut nodes)?;
            trace!("candidate {} for {:?} scores {}", mv, player, score);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        let Some((mv, score)) = best else {
            bail!("no legal moves left for {:?}", player);
        };
        debug!(
            "best move for {:?} is {} with score {} after {} positions",
            player, mv, score, nodes
        );
        Ok(mv)
    }

    /// Score of `player` playing `mv` now, from `player`'s point of view:
    /// 1 for a forced win, 0 for a draw, -1 for a forced loss.
    pub fn evaluate<G: Game>(&self, game: &mut G, mv: Move, player: Player) -> Result<i32> {
        let mut nodes = 0usize;
        Ok(self.score_move(game, mv, player, &mut nodes)?)
    }

    fn score_move<G: Game>(
        &self,
        game: &mut G,
        mv: Move,
        player: Player,
        nodes: &mut usize,
    ) -> Result<i32, IllegalMove> {
        game.apply_move(mv, player)?;
        let score = self.minimax(game, mv, player, player, nodes);
        game.undo_move(mv);
        score
    }

    fn minimax<G: Game>(
        &self,
        game: &mut G,
        last_move: Move,
        last_player: Player,
        maximizer: Player,
        nodes: &mut usize,
    ) -> Result<i32, IllegalMove> {
        *nodes += 1;

        let status = game.status(last_move.row(), last_move.col(), last_player);
        if status.is_terminal() {
            return Ok(Self::leaf_score(status, maximizer));
        }

        let next = last_player.opponent();
        let maximizing = next == maximizer;
        let mut best: Option<i32> = None;

        for mv in game.legal_moves() {
            game.apply_move(mv, next)?;
            let score = self.minimax(game, mv, next, maximizer, nodes);
            game.undo_move(mv);
            let score = score?;

            best = Some(match best {
                None => score,
                Some(best) if maximizing => best.max(score),
                Some(best) => best.min(score),
            });
        }

        Ok(best.unwrap_or(0))
    }

    fn leaf_score(status: GameStatus, maximizer: Player) -> i32 {
        match status.winner() {
            Some(winner) if winner == maximizer => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}
