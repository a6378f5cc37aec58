//! One side's stones and sumo levels

use super::{Color, Pos, Side, BOARD_SIZE, NUM_COLORS};

/// Sumo level of a stone (0 = plain stone, 4 = quadruple sumo)
pub type SumoLevel = u8;

/// Highest sumo level a stone can reach
pub const MAX_SUMO_LEVEL: SumoLevel = 4;

/// Per-level stone characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumoStats {
    /// Maximum rows travelled by a plain (non-pushing) move
    pub range: i8,
    /// Maximum number of stones pushed in one cascade
    pub power: u8,
    /// Match points the stone is worth
    pub points: u32,
}

const SUMO_STATS: [SumoStats; MAX_SUMO_LEVEL as usize + 1] = [
    SumoStats { range: 7, power: 0, points: 0 },
    SumoStats { range: 5, power: 1, points: 1 },
    SumoStats { range: 3, power: 2, points: 3 },
    SumoStats { range: 1, power: 3, points: 7 },
    SumoStats { range: 0, power: 4, points: 15 },
];

impl SumoStats {
    /// Stats for a sumo level (levels above the maximum are clamped)
    #[inline]
    pub fn for_level(level: SumoLevel) -> SumoStats {
        SUMO_STATS[level.min(MAX_SUMO_LEVEL) as usize]
    }
}

/// A side's eight stones, indexed by color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    side: Side,
    stones: [Pos; NUM_COLORS],
    sumo_levels: [SumoLevel; NUM_COLORS],
}

impl Player {
    /// Player with all stones on its home row in color order
    pub fn new(side: Side) -> Self {
        let row = side.start_row();
        let stones = std::array::from_fn(|color| {
            let col = match side {
                Side::First => color as i8,
                Side::Second => (BOARD_SIZE - 1 - color) as i8,
            };
            Pos::new(row, col)
        });
        Self::with_stones(side, stones)
    }

    /// Player with custom stone positions (levels start at 0)
    pub fn with_stones(side: Side, stones: [Pos; NUM_COLORS]) -> Self {
        Self {
            side,
            stones,
            sumo_levels: [0; NUM_COLORS],
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn start_row(&self) -> i8 {
        self.side.start_row()
    }

    /// Position of the stone of `color`
    #[inline]
    pub fn stone(&self, color: Color) -> Pos {
        self.stones[color as usize]
    }

    #[inline]
    pub fn stones(&self) -> &[Pos; NUM_COLORS] {
        &self.stones
    }

    #[inline]
    pub fn sumo_level(&self, color: Color) -> SumoLevel {
        self.sumo_levels[color as usize]
    }

    #[inline]
    pub fn sumo_levels(&self) -> &[SumoLevel; NUM_COLORS] {
        &self.sumo_levels
    }

    /// Color of this side's stone standing on `pos`, if any
    pub fn color_on(&self, pos: Pos) -> Option<Color> {
        self.stones
            .iter()
            .position(|&p| p == pos)
            .map(|color| color as Color)
    }

    /// Match points: sum of the points of every stone's level
    pub fn points(&self) -> u32 {
        self.sumo_levels
            .iter()
            .map(|&level| SumoStats::for_level(level).points)
            .sum()
    }

    #[inline]
    pub(crate) fn set_stone(&mut self, color: Color, pos: Pos) {
        self.stones[color as usize] = pos;
    }

    #[inline]
    pub(crate) fn set_sumo_level(&mut self, color: Color, level: SumoLevel) {
        self.sumo_levels[color as usize] = level.min(MAX_SUMO_LEVEL);
    }

    /// Move every stone back onto the home row, keeping their relative order.
    ///
    /// Stones closest to home come first, ties ordered by column. With
    /// `mirror_columns` columns are read and filled right to left instead.
    pub fn reset_stones(&mut self, mirror_columns: bool) {
        let adjust = |col: i8| if mirror_columns { BOARD_SIZE as i8 - 1 - col } else { col };
        let start_row = self.start_row();

        let mut order: [usize; NUM_COLORS] = std::array::from_fn(|color| color);
        order.sort_by_key(|&color| {
            let pos = self.stones[color];
            ((pos.row - start_row).abs(), adjust(pos.col))
        });

        for (slot, &color) in order.iter().enumerate() {
            self.stones[color] = Pos::new(start_row, adjust(slot as i8));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(list: [(i8, i8); NUM_COLORS]) -> [Pos; NUM_COLORS] {
        list.map(|(r, c)| Pos::new(r, c))
    }

    #[test]
    fn test_initial_layout() {
        let first = Player::new(Side::First);
        let second = Player::new(Side::Second);
        assert_eq!(first.stone(0), Pos::new(7, 0));
        assert_eq!(first.stone(7), Pos::new(7, 7));
        assert_eq!(second.stone(0), Pos::new(0, 7));
        assert_eq!(second.stone(7), Pos::new(0, 0));
        assert_eq!(first.points(), 0);
    }

    #[test]
    fn test_sumo_stats_monotonic() {
        for level in 1..=MAX_SUMO_LEVEL {
            let prev = SumoStats::for_level(level - 1);
            let cur = SumoStats::for_level(level);
            assert!(cur.range < prev.range);
            assert!(cur.power > prev.power);
            assert!(cur.points > prev.points);
        }
        assert_eq!(SumoStats::for_level(9), SumoStats::for_level(MAX_SUMO_LEVEL));
    }

    #[test]
    fn test_points() {
        let mut player = Player::new(Side::First);
        player.set_sumo_level(0, 1);
        player.set_sumo_level(3, 2);
        assert_eq!(player.points(), 4);
        player.set_sumo_level(5, 9);
        assert_eq!(player.sumo_level(5), MAX_SUMO_LEVEL);
        assert_eq!(player.points(), 19);
    }

    #[test]
    fn test_color_on() {
        let player = Player::new(Side::Second);
        assert_eq!(player.color_on(Pos::new(0, 2)), Some(5));
        assert_eq!(player.color_on(Pos::new(4, 4)), None);
    }

    #[test]
    fn test_reset_first_from_left() {
        let mut player = Player::with_stones(
            Side::First,
            positions([(7, 0), (7, 1), (7, 2), (6, 0), (6, 1), (6, 2), (0, 0), (1, 0)]),
        );
        player.reset_stones(false);
        assert_eq!(
            player.stones(),
            &positions([(7, 0), (7, 1), (7, 2), (7, 3), (7, 4), (7, 5), (7, 7), (7, 6)])
        );
    }

    #[test]
    fn test_reset_first_from_right() {
        let mut player = Player::with_stones(
            Side::First,
            positions([(7, 0), (7, 1), (7, 2), (6, 0), (6, 1), (6, 2), (0, 0), (1, 0)]),
        );
        player.reset_stones(true);
        assert_eq!(
            player.stones(),
            &positions([(7, 5), (7, 6), (7, 7), (7, 2), (7, 3), (7, 4), (7, 0), (7, 1)])
        );
    }

    #[test]
    fn test_reset_keeps_levels() {
        let mut player = Player::new(Side::Second);
        player.set_sumo_level(2, 3);
        player.set_stone(2, Pos::new(5, 5));
        player.reset_stones(false);
        assert_eq!(player.sumo_level(2), 3);
        assert_eq!(player.stone(2).row, 0);
    }
}
