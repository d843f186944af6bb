//! Plain-text tables for the terminal.

use crate::dice::DiceSet;
use crate::game::{Game, Player};
use crate::scoring::CategoryKind;

/// Shown for a category nobody has filled yet.
pub const NOT_ATTEMPTED: &str = "-";

/// The score sheet: one row per category, one column per seat, then the
/// upper total (bonus included), lower total, extra Kniffel bonus and
/// grand total.
///
/// ```
/// use kniffel::cli::render_scores;
/// use kniffel::core::GameConfig;
/// use kniffel::game::Game;
///
/// let game = Game::new(&GameConfig::standard(2, 0).with_seed(1)).unwrap();
/// let table = render_scores(&game);
///
/// assert!(table.contains("Player 1"));
/// assert!(table.contains("Kniffel-Bonus"));
/// ```
#[must_use]
pub fn render_scores<R>(game: &Game<R>) -> String {
    let players: Vec<&Player> = game.players().values().collect();

    let mut header = vec!["Id".to_string(), "Categories".to_string()];
    header.extend(players.iter().map(|p| p.name().to_string()));

    let mut rows = vec![header];
    let push_category = |rows: &mut Vec<Vec<String>>, kind: CategoryKind| {
        let mut row = vec![kind.index().to_string(), kind.name().to_string()];
        row.extend(players.iter().map(|p| {
            let slot = p.board().slot(kind);
            if slot.is_committed() {
                slot.score().to_string()
            } else {
                NOT_ATTEMPTED.to_string()
            }
        }));
        rows.push(row);
    };

    for kind in CategoryKind::UPPER {
        push_category(&mut rows, kind);
    }
    rows.push(total_row("Total Upper", &players, |p| p.board().upper_total()));
    for kind in CategoryKind::ALL.into_iter().filter(|k| !k.is_upper()) {
        push_category(&mut rows, kind);
    }
    rows.push(total_row("Total Lower", &players, |p| p.board().lower_total()));
    rows.push(total_row("Kniffel-Bonus", &players, |p| p.board().bonus_points()));
    rows.push(total_row("Total", &players, Player::total));

    layout(&rows)
}

/// The dice: number, face and whether each die is held.
#[must_use]
pub fn render_dice(dice: &DiceSet) -> String {
    let mut numbers = vec!["Dice Number".to_string()];
    let mut values = vec!["Dice Value".to_string()];
    let mut held = vec!["Held".to_string()];

    for (i, die) in dice.dice().iter().enumerate() {
        numbers.push((i + 1).to_string());
        values.push(die.value.to_string());
        held.push(if die.held { "yes" } else { "no" }.to_string());
    }

    layout(&[numbers, values, held])
}

fn total_row(label: &str, players: &[&Player], total: impl Fn(&Player) -> u32) -> Vec<String> {
    let mut row = vec!["==".to_string(), label.to_string()];
    row.extend(players.iter().map(|p| total(p).to_string()));
    row
}

/// Pad every column to its widest cell and draw `+---+` rules around the
/// header and the body.
fn layout(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .chain(std::iter::once("+".to_string()))
        .collect();

    let mut lines = vec![rule.clone()];
    for (i, row) in rows.iter().enumerate() {
        let cells: String = widths
            .iter()
            .enumerate()
            .map(|(c, &width)| {
                let cell = row.get(c).map_or("", String::as_str);
                format!("| {cell:<width$} ")
            })
            .collect();
        lines.push(format!("{cells}|"));
        if i == 0 {
            lines.push(rule.clone());
        }
    }
    lines.push(rule);
    lines.join("\n")
}
