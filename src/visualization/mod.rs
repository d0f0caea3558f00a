pub mod fabric_vis3d;
