//! In-memory movie catalog and the carousel definitions derived from it

use cinerow_model::{CarouselData, CarouselId, CarouselItem, Movie};

/// Everything the mock API serves. Built once at startup, shared read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    carousels: Vec<CarouselData>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>, carousels: Vec<CarouselData>) -> Self {
        Self { movies, carousels }
    }

    /// The fixture catalog the mock server ships with.
    pub fn seeded() -> Self {
        let movies: Vec<Movie> = [
            "The Avengers",
            "Avengers: Endgame",
            "Inception",
            "Interstellar",
            "The Dark Knight",
            "Parasite",
            "Oldboy",
            "The Handmaiden",
            "Dune",
            "Dune: Part Two",
            "Arrival",
            "Blade Runner 2049",
            "Mad Max: Fury Road",
            "Whiplash",
            "La La Land",
            "Everything Everywhere All at Once",
            "Spirited Away",
            "Your Name",
            "The Matrix",
            "Past Lives",
        ]
        .iter()
        .enumerate()
        .map(|(i, title)| {
            Movie::new(
                format!("movie_{}", i + 1),
                *title,
                format!("/images/movie_{}.png", i + 1),
            )
        })
        .collect();

        let row = |id: &str, title: &str, range: std::ops::Range<usize>, ipv, step| {
            CarouselData {
                id: Some(CarouselId::new(id).expect("seed ids are non-blank")),
                title: title.to_owned(),
                items_per_view: Some(ipv),
                step_size: Some(step),
                items: movies[range]
                    .iter()
                    .map(|m| CarouselItem::new(m.id.clone(), m.image_url.clone()))
                    .collect(),
            }
        };

        let carousels = vec![
            row("featured", "Featured", 0..20, 6, 2),
            row("top-rated", "Top Rated", 4..12, 3, 3),
            row("new-releases", "New Releases", 8..18, 6, 1),
        ];

        Self::new(movies, carousels)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn carousels(&self) -> &[CarouselData] {
        &self.carousels
    }
}

/// Case-insensitive substring match over titles. A blank query matches
/// nothing; the caller is expected to short-circuit it before getting here.
pub fn filter_movies(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
