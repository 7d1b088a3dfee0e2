use std::{collections::HashMap, sync::Arc};

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::{
    models::{
        leaderboard::LeaderboardEntry,
        picks::{Pick, PickResult},
        users::User,
    },
    repositories::{pick_repository::PickRepository, user_repository::UserRepository},
    utils::errors::app_error::AppError,
};

#[derive(Default)]
struct Tally {
    wins: i32,
    losses: i32,
    pushes: i32,
}

#[derive(Clone)]
pub struct StandingsService {
    pick_repository: Arc<PickRepository>,
    user_repository: Arc<UserRepository>,
}

impl StandingsService {
    pub fn new(
        pick_repository: Arc<PickRepository>,
        user_repository: Arc<UserRepository>,
    ) -> Self {
        StandingsService {
            pick_repository,
            user_repository,
        }
    }

    /// Recompute the leaderboard from every submitted, graded pick. Stateless
    /// and idempotent; the result is derived, never the source of truth.
    pub async fn list_standings(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let users = self.user_repository.list_users().await?;
        let picks = self.pick_repository.list_graded_picks().await?;

        info!(
            "Computing standings for {} users over {} graded picks",
            users.len(),
            picks.len()
        );

        Ok(compute_leaderboard(&users, &picks))
    }

    pub async fn get_user_standing(&self, username: &str) -> Result<LeaderboardEntry, AppError> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let standings = self.list_standings().await?;
        standings
            .into_iter()
            .find(|entry| entry.user_id == user.id)
            .ok_or(AppError::UserNotFound)
    }
}

/// Build the ranked leaderboard from graded picks.
///
/// Ranking follows SQL `RANK()` semantics: entries tied on
/// `(win_percentage, weighted_wins)` share the lower rank number and the next
/// distinct entry skips past them (1, 1, 3). Games back measures the win/loss
/// differential against the best differential among the rank-1 entries, in
/// half-game steps.
pub fn compute_leaderboard(users: &[User], picks: &[Pick]) -> Vec<LeaderboardEntry> {
    let mut tallies: HashMap<Uuid, Tally> = users
        .iter()
        .map(|user| (user.id, Tally::default()))
        .collect();

    for pick in picks {
        if !pick.submitted {
            continue;
        }
        let Some(result) = pick.result else {
            continue;
        };
        // Picks from users outside the pool roster are ignored.
        let Some(tally) = tallies.get_mut(&pick.user_id) else {
            continue;
        };
        match result {
            PickResult::Win => tally.wins += pick.weight(),
            PickResult::Loss => tally.losses += pick.weight(),
            PickResult::Push => tally.pushes += pick.weight(),
        }
    }

    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .map(|user| {
            let tally = &tallies[&user.id];
            LeaderboardEntry {
                user_id: user.id,
                username: user.username.clone(),
                weighted_wins: tally.wins,
                weighted_losses: tally.losses,
                weighted_pushes: tally.pushes,
                win_percentage: win_percentage(tally.wins, tally.losses),
                rank: 0,
                games_back: Decimal::ZERO,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.win_percentage
            .cmp(&a.win_percentage)
            .then(b.weighted_wins.cmp(&a.weighted_wins))
    });

    for i in 0..entries.len() {
        let tied_with_previous = i > 0
            && entries[i].win_percentage == entries[i - 1].win_percentage
            && entries[i].weighted_wins == entries[i - 1].weighted_wins;
        entries[i].rank = if tied_with_previous {
            entries[i - 1].rank
        } else {
            (i + 1) as u32
        };
    }

    // Best win/loss differential among the rank-1 entries.
    let leader_differential = entries
        .iter()
        .filter(|entry| entry.rank == 1)
        .map(|entry| entry.weighted_wins - entry.weighted_losses)
        .max()
        .unwrap_or(0);

    for entry in &mut entries {
        if entry.rank == 1 {
            continue;
        }
        let differential = entry.weighted_wins - entry.weighted_losses;
        let games_back = Decimal::from(leader_differential - differential) / Decimal::from(2);
        entry.games_back = games_back.max(Decimal::ZERO);
    }

    entries
}

fn win_percentage(wins: i32, losses: i32) -> Decimal {
    let decided = wins + losses;
    if decided > 0 {
        (Decimal::from(wins * 100) / Decimal::from(decided)).round_dp(1)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::picks::PickType;

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: name.to_string(),
        }
    }

    fn graded_pick(user_id: Uuid, result: PickResult, is_triple_play: bool) -> Pick {
        Pick {
            id: Uuid::new_v4(),
            user_id,
            game_id: Uuid::new_v4(),
            pick_type: PickType::HomeSpread,
            spread_value: Some(Decimal::from(-3)),
            is_triple_play,
            submitted: true,
            result: Some(result),
            created_at: None,
        }
    }

    fn record(user_id: Uuid, wins: i32, losses: i32, pushes: i32) -> Vec<Pick> {
        let mut picks = Vec::new();
        picks.extend((0..wins).map(|_| graded_pick(user_id, PickResult::Win, false)));
        picks.extend((0..losses).map(|_| graded_pick(user_id, PickResult::Loss, false)));
        picks.extend((0..pushes).map(|_| graded_pick(user_id, PickResult::Push, false)));
        picks
    }

    fn entry<'a>(board: &'a [LeaderboardEntry], user: &User) -> &'a LeaderboardEntry {
        board.iter().find(|e| e.user_id == user.id).unwrap()
    }

    #[test]
    fn test_triple_play_counts_three_times() {
        let alice = user("alice");
        let picks = vec![
            graded_pick(alice.id, PickResult::Win, true),
            graded_pick(alice.id, PickResult::Loss, false),
        ];

        let board = compute_leaderboard(&[alice.clone()], &picks);

        let e = entry(&board, &alice);
        assert_eq!(e.weighted_wins, 3);
        assert_eq!(e.weighted_losses, 1);
        assert_eq!(e.win_percentage, Decimal::new(750, 1));
    }

    #[test]
    fn test_pushes_never_enter_the_win_percentage() {
        let alice = user("alice");
        let mut picks = record(alice.id, 2, 0, 4);
        picks.push(graded_pick(alice.id, PickResult::Push, true));

        let board = compute_leaderboard(&[alice.clone()], &picks);

        let e = entry(&board, &alice);
        assert_eq!(e.weighted_pushes, 7);
        assert_eq!(e.win_percentage, Decimal::from(100).round_dp(1));
    }

    #[test]
    fn test_ties_share_rank_and_the_next_rank_skips() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let mut picks = record(alice.id, 5, 3, 0);
        picks.extend(record(bob.id, 5, 3, 0));
        picks.extend(record(carol.id, 4, 4, 0));

        let board =
            compute_leaderboard(&[alice.clone(), bob.clone(), carol.clone()], &picks);

        assert_eq!(entry(&board, &alice).rank, 1);
        assert_eq!(entry(&board, &bob).rank, 1);
        assert_eq!(entry(&board, &carol).rank, 3);
    }

    #[test]
    fn test_games_back_in_half_game_steps() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        // Leader differential 6-2 = +4.
        let mut picks = record(alice.id, 6, 2, 0);
        picks.extend(record(bob.id, 3, 3, 0));
        picks.extend(record(carol.id, 2, 6, 0));

        let board =
            compute_leaderboard(&[alice.clone(), bob.clone(), carol.clone()], &picks);

        assert_eq!(entry(&board, &alice).games_back, Decimal::ZERO);
        assert_eq!(entry(&board, &bob).games_back, Decimal::from(2));
        assert_eq!(entry(&board, &carol).games_back, Decimal::from(4));
    }

    #[test]
    fn test_games_back_can_land_on_a_half_game() {
        let alice = user("alice");
        let bob = user("bob");
        let mut picks = record(alice.id, 5, 2, 0); // +3
        picks.extend(record(bob.id, 4, 4, 0)); // 0

        let board = compute_leaderboard(&[alice.clone(), bob.clone()], &picks);

        assert_eq!(entry(&board, &bob).games_back, Decimal::new(15, 1));
    }

    #[test]
    fn test_games_back_never_goes_negative() {
        let alice = user("alice");
        let bob = user("bob");
        // Alice leads on percentage (100%) with a +3 differential; Bob's
        // differential is larger (+15) but his percentage is worse.
        let mut picks = record(alice.id, 3, 0, 0);
        picks.extend(record(bob.id, 20, 5, 0));

        let board = compute_leaderboard(&[alice.clone(), bob.clone()], &picks);

        assert_eq!(entry(&board, &alice).rank, 1);
        assert_eq!(entry(&board, &bob).games_back, Decimal::ZERO);
    }

    #[test]
    fn test_all_push_user_is_measured_by_differential_only() {
        let alice = user("alice");
        let bob = user("bob");
        let carol = user("carol");
        let mut picks = record(alice.id, 6, 2, 0); // +4
        picks.extend(record(bob.id, 0, 0, 8)); // all pushes, differential 0
        picks.extend(record(carol.id, 2, 6, 0)); // -4

        let board =
            compute_leaderboard(&[alice.clone(), bob.clone(), carol.clone()], &picks);

        let b = entry(&board, &bob);
        assert_eq!(b.win_percentage, Decimal::ZERO);
        // Closer in games back than Carol despite having no decided picks.
        assert_eq!(b.games_back, Decimal::from(2));
        assert_eq!(entry(&board, &carol).games_back, Decimal::from(4));
    }

    #[test]
    fn test_zero_pick_user_ranks_last_with_zero_counts() {
        let alice = user("alice");
        let bob = user("bob");
        let picks = record(alice.id, 2, 1, 0);

        let board = compute_leaderboard(&[alice.clone(), bob.clone()], &picks);

        let b = entry(&board, &bob);
        assert_eq!(
            (b.weighted_wins, b.weighted_losses, b.weighted_pushes),
            (0, 0, 0)
        );
        assert_eq!(b.win_percentage, Decimal::ZERO);
        assert_eq!(b.rank, 2);
        assert_eq!(entry(&board, &alice).win_percentage, Decimal::new(667, 1));
    }

    #[test]
    fn test_unsubmitted_and_ungraded_picks_are_skipped() {
        let alice = user("alice");
        let mut unsubmitted = graded_pick(alice.id, PickResult::Win, false);
        unsubmitted.submitted = false;
        let mut ungraded = graded_pick(alice.id, PickResult::Win, false);
        ungraded.result = None;
        let picks = vec![
            unsubmitted,
            ungraded,
            graded_pick(alice.id, PickResult::Loss, false),
        ];

        let board = compute_leaderboard(&[alice.clone()], &picks);

        let e = entry(&board, &alice);
        assert_eq!(e.weighted_wins, 0);
        assert_eq!(e.weighted_losses, 1);
    }

    #[test]
    fn test_empty_input_yields_empty_leaderboard() {
        assert!(compute_leaderboard(&[], &[]).is_empty());
    }

    #[test]
    fn test_rank_and_percentage_are_monotonic() {
        let users: Vec<User> = (0..6).map(|i| user(&format!("user{i}"))).collect();
        let records = [(7, 1, 0), (5, 3, 2), (5, 3, 0), (4, 4, 1), (1, 6, 0), (0, 0, 0)];
        let mut picks = Vec::new();
        for (u, (w, l, p)) in users.iter().zip(records) {
            picks.extend(record(u.id, w, l, p));
        }

        let board = compute_leaderboard(&users, &picks);

        for pair in board.windows(2) {
            assert!(pair[0].rank <= pair[1].rank);
            assert!(pair[0].win_percentage >= pair[1].win_percentage);
        }
        assert!(board.iter().all(|e| e.games_back >= Decimal::ZERO));
        assert!(board.iter().any(|e| e.games_back == Decimal::ZERO));
    }
}
