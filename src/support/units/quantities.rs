use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P2, Z0},
};

/// Spin creepage (angular slip per unit rolled distance), 1/m in SI.
pub type SpinCreepage = Quantity<ISQ<N1, Z0, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Tangential shear flexibility (displacement per unit traction), m/Pa in SI.
pub type ShearFlexibility = Quantity<ISQ<P2, N1, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
