use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::board_mut;
use crate::error::NotFound;
use crate::models::{Board, Card, CreateCard, MoveCard, UpdateCard};
use crate::reorder::insert_clamped;

/// Appends a new card to the tail of the column.
pub fn create_card(
    boards: &mut [Board],
    board_id: Uuid,
    column_id: Uuid,
    input: CreateCard,
    now: DateTime<Utc>,
) -> Result<Card, NotFound> {
    let board = board_mut(boards, board_id)?;
    let column = board
        .column_mut(column_id)
        .ok_or(NotFound::Column(column_id))?;
    let card = Card::new(input, now);
    column.cards.push(card.clone());

    board.touch(now);
    Ok(card)
}

pub fn update_card(
    boards: &mut [Board],
    board_id: Uuid,
    card_id: Uuid,
    input: UpdateCard,
    now: DateTime<Utc>,
) -> Result<Card, NotFound> {
    let board = board_mut(boards, board_id)?;
    let card = board.card_mut(card_id).ok_or(NotFound::Card(card_id))?;
    input.apply(card, now);
    let card = card.clone();

    board.touch(now);
    Ok(card)
}

pub fn delete_card(
    boards: &mut [Board],
    board_id: Uuid,
    card_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Card, NotFound> {
    let board = board_mut(boards, board_id)?;
    let removed = board.columns.iter_mut().find_map(|column| {
        column
            .card_position(card_id)
            .map(|index| column.cards.remove(index))
    });
    let card = removed.ok_or(NotFound::Card(card_id))?;

    board.touch(now);
    Ok(card)
}

/// Takes the card out of the source column and inserts it into the target
/// column at `target_index`, clamped to the tail.
///
/// The removal happens first, so for a move within one column the index is
/// interpreted against the sequence without the card.
pub fn move_card(
    boards: &mut [Board],
    board_id: Uuid,
    card_id: Uuid,
    input: &MoveCard,
    now: DateTime<Utc>,
) -> Result<Card, NotFound> {
    let board = board_mut(boards, board_id)?;
    let source = board
        .columns
        .iter()
        .position(|column| column.id == input.source_column_id)
        .ok_or(NotFound::Column(input.source_column_id))?;
    let target = board
        .columns
        .iter()
        .position(|column| column.id == input.target_column_id)
        .ok_or(NotFound::Column(input.target_column_id))?;
    let index = board.columns[source]
        .card_position(card_id)
        .ok_or(NotFound::Card(card_id))?;

    let mut card = board.columns[source].cards.remove(index);
    card.touch(now);
    insert_clamped(&mut board.columns[target].cards, input.target_index, card.clone());

    board.touch(now);
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::Column;

    struct Fixture {
        boards: Vec<Board>,
        board_id: Uuid,
        x: Uuid,
        y: Uuid,
    }

    fn fixture(x_cards: &[&str], y_cards: &[&str]) -> Fixture {
        let now = Utc::now();
        let mut board = Board::new("Board", now);
        board.columns = vec![Column::new("X", "#111111", 0), Column::new("Y", "#222222", 1)];
        let (board_id, x, y) = (board.id, board.columns[0].id, board.columns[1].id);
        let mut boards = vec![board];

        for (column_id, titles) in [(x, x_cards), (y, y_cards)] {
            for title in titles {
                create_card(
                    &mut boards,
                    board_id,
                    column_id,
                    CreateCard {
                        title: title.to_string(),
                        ..Default::default()
                    },
                    now,
                )
                .unwrap();
            }
        }

        Fixture {
            boards,
            board_id,
            x,
            y,
        }
    }

    impl Fixture {
        fn titles(&self, column_id: Uuid) -> Vec<&str> {
            self.boards[0]
                .column(column_id)
                .unwrap()
                .cards
                .iter()
                .map(|card| card.title.as_str())
                .collect()
        }

        fn card_id(&self, title: &str) -> Uuid {
            self.boards[0]
                .columns
                .iter()
                .flat_map(|column| column.cards.iter())
                .find(|card| card.title == title)
                .unwrap()
                .id
        }

        fn move_to(
            &mut self,
            title: &str,
            from: Uuid,
            to: Uuid,
            index: usize,
        ) -> Result<Card, NotFound> {
            let card_id = self.card_id(title);
            move_card(
                &mut self.boards,
                self.board_id,
                card_id,
                &MoveCard {
                    source_column_id: from,
                    target_column_id: to,
                    target_index: index,
                },
                Utc::now(),
            )
        }
    }

    #[test]
    fn test_create_card_appends_to_tail() {
        let f = fixture(&["c1", "c2"], &[]);
        assert_eq!(f.titles(f.x), vec!["c1", "c2"]);
        let card = f.boards[0].card(f.card_id("c2")).unwrap();
        assert!(card.comments.is_empty());
        assert_eq!(card.created_at, card.updated_at);
    }

    #[test]
    fn test_create_card_in_missing_column() {
        let mut f = fixture(&[], &[]);
        let missing = Uuid::new_v4();
        let result = create_card(
            &mut f.boards,
            f.board_id,
            missing,
            CreateCard::default(),
            Utc::now(),
        );
        assert_eq!(result, Err(NotFound::Column(missing)));
    }

    #[test]
    fn test_move_card_between_columns() {
        let mut f = fixture(&["c1", "c2", "c3"], &["d1"]);
        let (x, y) = (f.x, f.y);

        f.move_to("c2", x, y, 0).unwrap();

        assert_eq!(f.titles(x), vec!["c1", "c3"]);
        assert_eq!(f.titles(y), vec!["c2", "d1"]);
    }

    #[test]
    fn test_move_card_within_column_removes_before_insert() {
        let mut f = fixture(&["c1", "c2", "c3"], &[]);
        let x = f.x;

        f.move_to("c1", x, x, 2).unwrap();
        assert_eq!(f.titles(x), vec!["c2", "c3", "c1"]);

        f.move_to("c1", x, x, 0).unwrap();
        assert_eq!(f.titles(x), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_move_card_to_own_index_is_identity() {
        let mut f = fixture(&["c1", "c2", "c3"], &[]);
        let x = f.x;

        for (index, title) in ["c1", "c2", "c3"].into_iter().enumerate() {
            f.move_to(title, x, x, index).unwrap();
            assert_eq!(f.titles(x), vec!["c1", "c2", "c3"]);
        }
    }

    #[test]
    fn test_move_card_index_past_end_appends() {
        let mut f = fixture(&["c1"], &["d1", "d2"]);
        let (x, y) = (f.x, f.y);

        f.move_to("c1", x, y, 42).unwrap();
        assert_eq!(f.titles(y), vec!["d1", "d2", "c1"]);
        assert!(f.titles(x).is_empty());
    }

    #[test]
    fn test_move_card_wrong_source_is_noop() {
        let mut f = fixture(&["c1"], &["d1"]);
        let (x, y) = (f.x, f.y);
        let before = f.boards.clone();

        let result = f.move_to("d1", x, y, 0);
        assert!(matches!(result, Err(NotFound::Card(_))));
        assert_eq!(f.boards, before);
    }

    #[test]
    fn test_move_card_missing_target_is_noop() {
        let mut f = fixture(&["c1"], &[]);
        let x = f.x;
        let missing = Uuid::new_v4();
        let before = f.boards.clone();

        let result = f.move_to("c1", x, missing, 0);
        assert_eq!(result, Err(NotFound::Column(missing)));
        assert_eq!(f.boards, before);
    }

    #[test]
    fn test_update_card_finds_card_in_any_column() {
        let mut f = fixture(&["c1"], &["d1"]);
        let card_id = f.card_id("d1");
        let tag = Uuid::new_v4();

        let updated = update_card(
            &mut f.boards,
            f.board_id,
            card_id,
            UpdateCard {
                title: Some("renamed".to_string()),
                tags: Some(vec![tag, tag]),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();

        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.tags, vec![tag]);
        assert_eq!(f.titles(f.y), vec!["renamed"]);
    }

    #[test]
    fn test_delete_card() {
        let mut f = fixture(&["c1", "c2", "c3"], &[]);
        let card_id = f.card_id("c2");

        let removed = delete_card(&mut f.boards, f.board_id, card_id, Utc::now()).unwrap();
        assert_eq!(removed.title, "c2");
        assert_eq!(f.titles(f.x), vec!["c1", "c3"]);

        let again = delete_card(&mut f.boards, f.board_id, card_id, Utc::now());
        assert_eq!(again, Err(NotFound::Card(card_id)));
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_update_card_touches_card_and_board() {
        let mut f = fixture(&["c1"], &[]);
        let card_id = f.card_id("c1");

        update_card(
            &mut f.boards,
            f.board_id,
            card_id,
            UpdateCard {
                assignee: Some("Ana".to_string()),
                ..Default::default()
            },
            at(1),
        )
        .unwrap();

        let card = f.boards[0].card(card_id).unwrap();
        assert_eq!(card.updated_at, at(1));
        assert!(card.created_at < at(1));
        assert_eq!(f.boards[0].updated_at, at(1));
    }

    #[test]
    fn test_move_card_touches_card_and_board() {
        let mut f = fixture(&["c1"], &["d1"]);
        let card_id = f.card_id("c1");

        let moved = move_card(
            &mut f.boards,
            f.board_id,
            card_id,
            &MoveCard {
                source_column_id: f.x,
                target_column_id: f.y,
                target_index: 0,
            },
            at(2),
        )
        .unwrap();

        assert_eq!(moved.updated_at, at(2));
        assert_eq!(f.boards[0].card(card_id).unwrap().updated_at, at(2));
        assert_eq!(f.boards[0].updated_at, at(2));
        let untouched = f.boards[0].card(f.card_id("d1")).unwrap();
        assert!(untouched.updated_at < at(2));
    }

    #[test]
    fn test_create_and_delete_card_touch_board() {
        let mut f = fixture(&["c1"], &[]);
        let (board_id, x) = (f.board_id, f.x);

        create_card(
            &mut f.boards,
            board_id,
            x,
            CreateCard {
                title: "c2".to_string(),
                ..Default::default()
            },
            at(3),
        )
        .unwrap();
        assert_eq!(f.boards[0].updated_at, at(3));

        let card_id = f.card_id("c1");
        delete_card(&mut f.boards, board_id, card_id, at(4)).unwrap();
        assert_eq!(f.boards[0].updated_at, at(4));
    }

    #[test]
    fn test_failed_card_operation_keeps_board_timestamp() {
        let mut f = fixture(&["c1"], &[]);
        let before = f.boards[0].updated_at;

        let missing = Uuid::new_v4();
        assert!(delete_card(&mut f.boards, f.board_id, missing, at(5)).is_err());
        assert_eq!(f.boards[0].updated_at, before);
    }
}
