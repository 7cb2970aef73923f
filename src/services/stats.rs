use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Board, ColumnStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStat {
    pub id: Uuid,
    pub title: String,
    pub count: usize,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    pub overdue: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub columns: Vec<ColumnStat>,
    pub summary: BoardSummary,
}

impl BoardStats {
    pub fn new(board: &Board, now: DateTime<Utc>) -> Self {
        Self {
            columns: column_stats(board),
            summary: board_summary(board, now),
        }
    }
}

/// Card count per column, in display order.
pub fn column_stats(board: &Board) -> Vec<ColumnStat> {
    board
        .sorted_columns()
        .into_iter()
        .map(|column| ColumnStat {
            id: column.id,
            title: column.title.clone(),
            count: column.cards.len(),
            color: column.color.clone(),
        })
        .collect()
}

/// Cards in columns without a recognisable status only count towards
/// `total` and `overdue`.
pub fn board_summary(board: &Board, now: DateTime<Utc>) -> BoardSummary {
    let mut summary = BoardSummary::default();

    for column in &board.columns {
        let count = column.cards.len();
        summary.total += count;
        match column.effective_status() {
            Some(ColumnStatus::Todo) => summary.todo += count,
            Some(ColumnStatus::InProgress) => summary.in_progress += count,
            Some(ColumnStatus::Done) => summary.done += count,
            None => {}
        }
        summary.overdue += column
            .cards
            .iter()
            .filter(|card| card.is_overdue(now))
            .count();
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, Column, CreateCard};
    use chrono::{Duration, TimeZone};

    fn card(title: &str, due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Card {
        Card::new(
            CreateCard {
                title: title.to_string(),
                due_date: due,
                ..Default::default()
            },
            now,
        )
    }

    #[test]
    fn test_summary_counts_by_status() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut board = Board::seeded(now);
        board.columns[0].cards.push(card("a", None, now));
        board.columns[0]
            .cards
            .push(card("b", Some(now - Duration::days(1)), now));
        board.columns[1]
            .cards
            .push(card("c", Some(now + Duration::days(1)), now));
        board.columns[2].cards.push(card("d", None, now));

        let summary = board_summary(&board, now);
        assert_eq!(
            summary,
            BoardSummary {
                total: 4,
                todo: 2,
                in_progress: 1,
                done: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn test_renamed_status_column_still_counts() {
        let now = Utc::now();
        let mut board = Board::seeded(now);
        board.columns[2].title = "Shipped".to_string();
        board.columns[2].cards.push(card("d", None, now));

        assert_eq!(board_summary(&board, now).done, 1);
    }

    #[test]
    fn test_legacy_titles_without_status() {
        let now = Utc::now();
        let mut board = Board::new("Old", now);
        let mut todo = Column::new("A Fazer", "#ef4444", 0);
        todo.cards.push(card("a", None, now));
        let mut custom = Column::new("Backlog", "#6b7280", 1);
        custom.cards.push(card("b", None, now));
        board.columns = vec![todo, custom];

        let summary = board_summary(&board, now);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.todo, 1);
        assert_eq!(summary.in_progress + summary.done, 0);
    }

    #[test]
    fn test_due_now_is_not_overdue() {
        let now = Utc::now();
        let mut board = Board::seeded(now);
        board.columns[0].cards.push(card("a", Some(now), now));

        assert_eq!(board_summary(&board, now).overdue, 0);
    }

    #[test]
    fn test_column_stats_follow_display_order() {
        let now = Utc::now();
        let mut board = Board::seeded(now);
        board.columns[0].order = 5;
        board.columns[1].cards.push(card("a", None, now));

        let stats = column_stats(&board);
        let titles: Vec<&str> = stats.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["In Progress", "Done", "To Do"]);
        assert_eq!(stats[0].count, 1);
        assert_eq!(stats[0].color, "#f59e0b");
    }
}
