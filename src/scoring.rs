//! Round-end artist ranking and value tiles.

use crate::board::ArtistValueBoard;
use crate::card::{ARTIST_COUNT, Artist};
use crate::game::ArtistCounts;
use crate::result::ArtistScore;

/// Value tiles for ranks 1 to 5.
pub const VALUE_TILES: [usize; ARTIST_COUNT] = [30, 20, 10, 0, 0];

/// Ranks artists by cards counted this round, most first.
///
/// Equal counts are ordered by print count, rarer artist first. Print counts
/// are distinct, so the order is total.
///
/// ```
/// use gavel::card::Artist;
/// use gavel::game::ArtistCounts;
/// use gavel::scoring::rank_artists;
///
/// let mut counts = ArtistCounts::default();
/// counts.add(Artist::Krypto, 2);
/// counts.add(Artist::Yoko, 2);
/// assert_eq!(&rank_artists(&counts)[..2], &[Artist::Yoko, Artist::Krypto]);
/// ```
#[must_use]
pub fn rank_artists(counts: &ArtistCounts) -> [Artist; ARTIST_COUNT] {
    let mut ranking = Artist::ALL;
    ranking.sort_by(|a, b| {
        counts
            .get(*b)
            .cmp(&counts.get(*a))
            .then_with(|| a.print_count().cmp(&b.print_count()))
    });
    ranking
}

/// Scores a round: ranks the artists and appends one tile per artist to the board.
///
/// Artists with no cards counted this round get a 0 tile whatever their rank.
pub fn score_round(counts: &ArtistCounts, board: &mut ArtistValueBoard) -> [ArtistScore; ARTIST_COUNT] {
    let ranking = rank_artists(counts);

    core::array::from_fn(|position| {
        let artist = ranking[position];
        let sold = counts.get(artist);
        let tile = if sold == 0 { 0 } else { VALUE_TILES[position] };
        board.append(artist, tile);

        ArtistScore {
            artist,
            rank: position + 1,
            sold,
            tile,
            value: board.value(artist),
        }
    })
}
