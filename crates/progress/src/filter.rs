//! Read-side goal queries.
//!
//! Pure classification of the stored goal set for presentation: view
//! filtering, summary counts and deadline arithmetic. Nothing here
//! mutates a goal.

use chrono::Duration;
use tenpin_core::{Goal, Time};

/// Which slice of the goal set to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalView {
    /// Every goal
    All,
    /// Not completed, deadline still ahead
    Active,
    /// Completed, regardless of deadline
    Completed,
    /// Not completed and past deadline
    Overdue,
}

/// Summary counts over the full goal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalCounts {
    /// All goals
    pub total: usize,
    /// Open goals with time left
    pub active: usize,
    /// Completed goals
    pub completed: usize,
    /// Open goals past their deadline
    pub overdue: usize,
}

/// Select the goals matching `view` as of `now`.
///
/// `Active`, `Completed` and `Overdue` partition the set: every goal
/// lands in exactly one of the three.
pub fn filter_goals(goals: &[Goal], view: GoalView, now: Time) -> Vec<Goal> {
    goals
        .iter()
        .filter(|g| match view {
            GoalView::All => true,
            GoalView::Active => !g.is_completed && g.deadline >= now,
            GoalView::Completed => g.is_completed,
            GoalView::Overdue => !g.is_completed && g.deadline < now,
        })
        .cloned()
        .collect()
}

/// Count each class over the full set (not a filtered view).
pub fn count_goals(goals: &[Goal], now: Time) -> GoalCounts {
    let mut counts = GoalCounts {
        total: goals.len(),
        ..GoalCounts::default()
    };
    for g in goals {
        if g.is_completed {
            counts.completed += 1;
        } else if g.deadline >= now {
            counts.active += 1;
        } else {
            counts.overdue += 1;
        }
    }
    counts
}

/// Whole days until the deadline, rounded up.
///
/// Negative when the deadline has passed; the magnitude is the number of
/// days overdue.
pub fn days_until_deadline(goal: &Goal, now: Time) -> i64 {
    // Millisecond granularity so the ceiling is exact for sub-second
    // remainders.
    let ms = (goal.deadline - now).num_milliseconds();
    let day = Duration::days(1).num_milliseconds();
    if ms % day == 0 {
        ms / day
    } else if ms > 0 {
        ms / day + 1
    } else {
        ms / day
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use tenpin_core::{GoalMetric, Priority};

    fn goal(deadline: Time, completed: bool) -> Goal {
        let mut g = Goal::new(
            "test",
            "",
            GoalMetric::Score,
            200.0,
            deadline,
            Priority::Low,
        );
        g.is_completed = completed;
        if completed {
            g.completed_at = Some(Utc::now());
        }
        g
    }

    #[test]
    fn views_partition_the_goal_set() {
        let now = Utc::now();
        let goals = vec![
            goal(now + Duration::days(5), false),
            goal(now - Duration::days(5), false),
            goal(now - Duration::days(5), true),
            goal(now + Duration::days(5), true),
            goal(now + Duration::days(1), false),
        ];

        let all = filter_goals(&goals, GoalView::All, now);
        let active = filter_goals(&goals, GoalView::Active, now);
        let completed = filter_goals(&goals, GoalView::Completed, now);
        let overdue = filter_goals(&goals, GoalView::Overdue, now);

        assert_eq!(all.len(), goals.len());
        assert_eq!(active.len() + completed.len() + overdue.len(), all.len());
        assert_eq!(active.len(), 2);
        assert_eq!(completed.len(), 2);
        assert_eq!(overdue.len(), 1);
    }

    #[test]
    fn completed_goals_are_never_overdue() {
        let now = Utc::now();
        let goals = vec![goal(now - Duration::days(10), true)];
        assert!(filter_goals(&goals, GoalView::Overdue, now).is_empty());
        assert_eq!(filter_goals(&goals, GoalView::Completed, now).len(), 1);
    }

    #[test]
    fn counts_cover_the_full_set() {
        let now = Utc::now();
        let goals = vec![
            goal(now + Duration::days(3), false),
            goal(now - Duration::hours(1), false),
            goal(now + Duration::days(9), true),
        ];

        let counts = count_goals(&goals, now);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.active, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.overdue, 1);
        assert_eq!(
            counts.active + counts.completed + counts.overdue,
            counts.total
        );
    }

    #[test]
    fn days_remaining_round_up() {
        let now = Utc::now();

        // A day and a half out still counts as two days.
        let g = goal(now + Duration::hours(36), false);
        assert_eq!(days_until_deadline(&g, now), 2);

        let g = goal(now + Duration::days(7), false);
        assert_eq!(days_until_deadline(&g, now), 7);

        let g = goal(now, false);
        assert_eq!(days_until_deadline(&g, now), 0);
    }

    #[test]
    fn sub_second_remainders_still_round_up() {
        let now = Utc::now();

        let g = goal(now + Duration::milliseconds(500), false);
        assert_eq!(days_until_deadline(&g, now), 1);

        let g = goal(now + Duration::days(1) + Duration::milliseconds(500), false);
        assert_eq!(days_until_deadline(&g, now), 2);
    }

    #[test]
    fn overdue_days_are_negative() {
        let now = Utc::now();

        let g = goal(now - Duration::hours(36), false);
        assert_eq!(days_until_deadline(&g, now), -1);

        let g = goal(now - Duration::days(3), false);
        assert_eq!(days_until_deadline(&g, now), -3);
    }
}
