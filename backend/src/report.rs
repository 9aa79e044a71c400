//! # Terminal Views
//!
//! Text rendering of the emergency list and the map selection, for operators
//! without the web front end.
//!
//! - `list` prints one card per emergency, most urgent first
//! - `browse` prints the list, then reads ids from stdin; each id toggles the
//!   map selection like clicking "Ver en mapa" on a card

use std::time::Duration;

use anyhow::{Result, anyhow};
use feed::{
    Board, Emergency, EmergencyFeed,
    display::{MARKER_ZOOM, UrgencyTier, toggle_label},
};
use indicatif::{ProgressBar, ProgressStyle};
use server::views::EmergencyCard;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};

pub async fn list(feed: &EmergencyFeed, json: bool) -> Result<()> {
    let board = load(feed).await?;

    if json {
        let cards: Vec<EmergencyCard> = board
            .sorted()
            .iter()
            .map(|emergency| EmergencyCard::new(emergency, false))
            .collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    print_board(&board);

    Ok(())
}

pub async fn browse(feed: &EmergencyFeed) -> Result<()> {
    let mut board = load(feed).await?;
    print_board(&board);

    println!("Type an emergency id to toggle it on the map, Ctrl+D to quit.");

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let id = line.trim();
        if id.is_empty() {
            continue;
        }

        if !board.sorted().iter().any(|emergency| emergency.id == id) {
            println!("No emergency with id {id}");
            continue;
        }

        println!("{}", render_marker(board.select(id)));
    }

    Ok(())
}

async fn load(feed: &EmergencyFeed) -> Result<Board> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.set_message("Loading emergencies...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let state = feed.load().await;
    pb.finish_and_clear();

    if let Some(message) = state.error() {
        return Err(anyhow!("{message}"));
    }

    let mut board = Board::new();
    board.sync(&state);

    Ok(board)
}

fn print_board(board: &Board) {
    if board.sorted().is_empty() {
        println!("No emergencies reported.");
        return;
    }

    println!("Emergencies: {}\n", board.sorted().len());

    for emergency in board.sorted() {
        println!("{}", render_card(emergency, board.is_selected(&emergency.id)));
    }
}

pub fn render_card(emergency: &Emergency, selected: bool) -> String {
    let tier = UrgencyTier::from_level(emergency.urgency_level);
    let mut card = format!(
        "[{}] {} ({}) - Urgencia {}\n",
        emergency.id,
        emergency.title,
        emergency.kind.icon(),
        tier.label()
    );

    if let Some(description) = &emergency.description {
        card.push_str(&format!("  {description}\n"));
    }
    card.push_str(&format!("  Tipo: {}\n", emergency.kind.label()));
    card.push_str(&format!(
        "  Dirección: {}\n",
        emergency.address.as_deref().unwrap_or("-")
    ));
    card.push_str(&format!("  Contacto: {}\n", emergency.contact_name));
    card.push_str(&format!("  > {}\n", toggle_label(selected)));

    card
}

pub fn render_marker(selected: Option<&Emergency>) -> String {
    match selected {
        Some(emergency) => format!(
            "Map: {} at ({}, {}) zoom {} [{}]\n  {}",
            emergency.title,
            emergency.latitude,
            emergency.longitude,
            MARKER_ZOOM,
            emergency.kind.color(),
            emergency.address.as_deref().unwrap_or("-")
        ),
        None => "Map: no emergency selected".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use feed::{EmergencyStatus, EmergencyType};

    use super::*;

    fn emergency() -> Emergency {
        Emergency {
            id: "e7".to_string(),
            title: "Necesitamos agua".to_string(),
            description: None,
            kind: EmergencyType::Supplies,
            status: EmergencyStatus::Active,
            urgency_level: 6,
            latitude: 39.41,
            longitude: -0.43,
            address: Some("Benetússer".to_string()),
            affected_people: 50,
            contact_name: "Rosa".to_string(),
            contact_phone: "644444444".to_string(),
            contact_email: None,
            created_at: "2024-11-03T07:30:00Z".to_string(),
            updated_at: None,
            is_active: None,
        }
    }

    #[test]
    fn test_card() {
        let card = render_card(&emergency(), false);

        assert!(card.starts_with("[e7] Necesitamos agua (package) - Urgencia Media"));
        assert!(card.contains("Tipo: Suministros"));
        assert!(card.contains("Dirección: Benetússer"));
        assert!(card.contains("Contacto: Rosa"));
        assert!(card.contains("> Ver en mapa"));
    }

    #[test]
    fn test_card_lines() {
        let mut emergency = emergency();
        emergency.description = Some("Sin agua potable".to_string());
        emergency.address = None;

        assert_eq!(
            render_card(&emergency, false),
            "[e7] Necesitamos agua (package) - Urgencia Media\n\
             \x20 Sin agua potable\n\
             \x20 Tipo: Suministros\n\
             \x20 Dirección: -\n\
             \x20 Contacto: Rosa\n\
             \x20 > Ver en mapa\n"
        );
    }

    #[test]
    fn test_selected_card() {
        assert!(render_card(&emergency(), true).contains("> Ocultar en mapa"));
    }

    #[test]
    fn test_marker() {
        let emergency = emergency();

        assert_eq!(
            render_marker(Some(&emergency)),
            "Map: Necesitamos agua at (39.41, -0.43) zoom 10 [#f59e0b]\n  Benetússer"
        );
        assert_eq!(render_marker(None), "Map: no emergency selected");
    }
}
