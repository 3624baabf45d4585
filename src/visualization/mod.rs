pub mod efield_vis2d;
