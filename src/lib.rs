// #![deny(missing_docs)]

pub mod ternary;

pub mod twodmap;
pub use twodmap::TwoDimensionalMap;

pub mod error;
pub use error::CarveError;

pub mod options;
pub use options::{CarveOptions, EnergyUpdate, RightEdge};

pub mod picture;
pub use picture::{Picture, Pixel};

pub mod energy;
pub use energy::{calculate_energy, EnergyMap};

pub mod seamfinder;
pub use seamfinder::{find_vertical_seam, Seam};

pub mod seamcarver;
pub use seamcarver::{reduce_width, reduce_width_with, Progress, SeamCarver};

pub mod dump;
pub use dump::energy_to_image;
