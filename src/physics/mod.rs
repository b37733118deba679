//! Electromagnetics calculations.
pub mod biotsavart;
pub mod circular_loop;
pub mod coil;
pub mod helmholtz;

pub use biotsavart::{field_loop_discrete, magnetic_field_loop_discrete};
pub use circular_loop::{
    field_loop_brho, field_loop_bz, field_loop_on_axis, magnetic_field_loop_brho,
    magnetic_field_loop_bz, magnetic_field_loop_on_axis,
};
pub use coil::{field_coil_on_axis, flux_density_coil, flux_density_coil_par, Coil};
pub use helmholtz::{
    field_anti_helmholtz_brho, field_anti_helmholtz_bz, field_anti_helmholtz_on_axis,
    field_helmholtz_brho, field_helmholtz_bz, field_helmholtz_on_axis,
    magnetic_field_anti_helmholtz_brho, magnetic_field_anti_helmholtz_bz,
    magnetic_field_anti_helmholtz_on_axis, magnetic_field_helmholtz_brho,
    magnetic_field_helmholtz_bz, magnetic_field_helmholtz_on_axis,
};
