//! Static board definition.
//!
//! All 40 tiles of the fixed board layout are enumerated in a compile-time
//! table indexed by board position. The layout is identical for every game
//! and is never regenerated; the only per-game data is the ownership state
//! kept in [`super::state::GameState`].

/// Money amounts throughout the engine. Signed: a player's balance may dip
/// below zero transiently before bankruptcy is settled.
pub type Money = i64;

/// The number of tiles on the board.
pub const BOARD_SIZE: usize = 40;

/// Board index of the Start tile.
pub const START_INDEX: usize = 0;

/// Board index of the Detention tile, where sent players are held.
pub const DETENTION_INDEX: usize = 10;

/// What a tile does when landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// The starting tile; passing it grants the lap bonus.
    Start,
    /// A purchasable, color-grouped, upgradable property.
    Zone,
    /// One of the four purchasable transit hubs.
    Transit,
    /// One of the two purchasable utilities.
    Utility,
    /// A 50/50 random payout or deduction.
    Event,
    /// A flat, unavoidable tax.
    Penalty,
    /// The holding tile itself. Harmless to visit.
    Detention,
    /// Teleports the player to Detention and jails them.
    GoToDetention,
}

/// The color group of a zone tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneGroup {
    Brown,
    Sky,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
}

/// All color groups in board order.
pub const ALL_GROUPS: [ZoneGroup; 8] = [
    ZoneGroup::Brown,
    ZoneGroup::Sky,
    ZoneGroup::Pink,
    ZoneGroup::Orange,
    ZoneGroup::Red,
    ZoneGroup::Yellow,
    ZoneGroup::Green,
    ZoneGroup::Blue,
];

/// Static description of a single tile.
///
/// `price` is present for purchasable kinds (Zone, Transit, Utility);
/// `rent` holds the base rent for zones and transits and the flat tax for
/// penalty tiles; `group` is present only for zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDescriptor {
    pub id: usize,
    pub kind: TileKind,
    pub name: &'static str,
    pub price: Option<Money>,
    pub rent: Option<Money>,
    pub group: Option<ZoneGroup>,
}

const fn zone(
    id: usize,
    name: &'static str,
    price: Money,
    rent: Money,
    group: ZoneGroup,
) -> TileDescriptor {
    TileDescriptor {
        id,
        kind: TileKind::Zone,
        name,
        price: Some(price),
        rent: Some(rent),
        group: Some(group),
    }
}

const fn transit(id: usize, name: &'static str) -> TileDescriptor {
    TileDescriptor {
        id,
        kind: TileKind::Transit,
        name,
        price: Some(200),
        rent: Some(25),
        group: None,
    }
}

const fn utility(id: usize, name: &'static str) -> TileDescriptor {
    TileDescriptor {
        id,
        kind: TileKind::Utility,
        name,
        price: Some(150),
        rent: None,
        group: None,
    }
}

const fn penalty(id: usize, name: &'static str, tax: Money) -> TileDescriptor {
    TileDescriptor {
        id,
        kind: TileKind::Penalty,
        name,
        price: None,
        rent: Some(tax),
        group: None,
    }
}

const fn plain(id: usize, kind: TileKind, name: &'static str) -> TileDescriptor {
    TileDescriptor {
        id,
        kind,
        name,
        price: None,
        rent: None,
        group: None,
    }
}

const fn event(id: usize, name: &'static str) -> TileDescriptor {
    plain(id, TileKind::Event, name)
}

/// The fixed board, indexed by position. Tile `id` equals its index.
pub const BOARD: [TileDescriptor; BOARD_SIZE] = [
    plain(0, TileKind::Start, "Central Station"),
    zone(1, "Sector 1-A", 60, 2, ZoneGroup::Brown),
    event(2, "Data Link"),
    zone(3, "Sector 1-B", 60, 4, ZoneGroup::Brown),
    penalty(4, "Cyber Tax", 200),
    transit(5, "North Hub"),
    zone(6, "Sector 2-A", 100, 6, ZoneGroup::Sky),
    event(7, "Pulse"),
    zone(8, "Sector 2-B", 100, 6, ZoneGroup::Sky),
    zone(9, "Sector 2-C", 120, 8, ZoneGroup::Sky),
    plain(10, TileKind::Detention, "Isolation"),
    zone(11, "Sector 3-A", 140, 10, ZoneGroup::Pink),
    utility(12, "Power Grid"),
    zone(13, "Sector 3-B", 140, 10, ZoneGroup::Pink),
    zone(14, "Sector 3-C", 160, 12, ZoneGroup::Pink),
    transit(15, "East Hub"),
    zone(16, "Sector 4-A", 180, 14, ZoneGroup::Orange),
    event(17, "Data Link"),
    zone(18, "Sector 4-B", 180, 14, ZoneGroup::Orange),
    zone(19, "Sector 4-C", 200, 16, ZoneGroup::Orange),
    event(20, "System Reboot"),
    zone(21, "Sector 5-A", 220, 18, ZoneGroup::Red),
    event(22, "Pulse"),
    zone(23, "Sector 5-B", 220, 18, ZoneGroup::Red),
    zone(24, "Sector 5-C", 240, 20, ZoneGroup::Red),
    transit(25, "South Hub"),
    zone(26, "Sector 6-A", 260, 22, ZoneGroup::Yellow),
    zone(27, "Sector 6-B", 260, 22, ZoneGroup::Yellow),
    utility(28, "Water Works"),
    zone(29, "Sector 6-C", 280, 24, ZoneGroup::Yellow),
    plain(30, TileKind::GoToDetention, "Lockdown"),
    zone(31, "Sector 7-A", 300, 26, ZoneGroup::Green),
    zone(32, "Sector 7-B", 300, 26, ZoneGroup::Green),
    event(33, "Data Link"),
    zone(34, "Sector 7-C", 320, 28, ZoneGroup::Green),
    transit(35, "West Hub"),
    event(36, "Pulse"),
    zone(37, "Sector 8-A", 350, 35, ZoneGroup::Blue),
    penalty(38, "Luxury Tax", 100),
    zone(39, "Sector 8-B", 400, 50, ZoneGroup::Blue),
];

/// Returns the descriptor at a board index.
///
/// # Panics
/// Panics if `index >= BOARD_SIZE`; positions are produced modulo the board
/// size so in-engine lookups are always in range.
pub fn tile(index: usize) -> &'static TileDescriptor {
    &BOARD[index]
}

/// Returns every tile belonging to a color group.
pub fn tiles_in_group(group: ZoneGroup) -> impl Iterator<Item = &'static TileDescriptor> {
    BOARD.iter().filter(move |t| t.group == Some(group))
}

/// Returns every tile of a given kind.
pub fn tiles_of_kind(kind: TileKind) -> impl Iterator<Item = &'static TileDescriptor> {
    BOARD.iter().filter(move |t| t.kind == kind)
}
