//! Anchor tables for the built-in colormaps.
//!
//! Each table holds RGB anchors in [0, 1]^3 at evenly spaced positions over
//! [0, 1]; sampling interpolates linearly between the two bracketing rows.
//! The analytic maps carry their exact breakpoints resampled to even
//! spacing; the perceptual maps are coarse resamplings of the reference
//! tables.

/// Classic blue-cyan-yellow-red map with dark endpoints.
pub(super) const JET: [[f32; 3]; 9] = [
    [0.0, 0.0, 0.5],
    [0.0, 0.0, 1.0],
    [0.0, 0.5, 1.0],
    [0.0, 1.0, 1.0],
    [0.5, 1.0, 0.5],
    [1.0, 1.0, 0.0],
    [1.0, 0.5, 0.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
];

/// Black-red-yellow-white heat map.
pub(super) const HOT: [[f32; 3]; 9] = [
    [0.0, 0.0, 0.0],
    [0.342, 0.0, 0.0],
    [0.685, 0.0, 0.0],
    [1.0, 0.026, 0.0],
    [1.0, 0.354, 0.0],
    [1.0, 0.682, 0.0],
    [1.0, 1.0, 0.016],
    [1.0, 1.0, 0.508],
    [1.0, 1.0, 1.0],
];

/// Cyan to magenta ramp.
pub(super) const COOL: [[f32; 3]; 2] = [[0.0, 1.0, 1.0], [1.0, 0.0, 1.0]];

/// Perceptually uniform purple-teal-yellow map.
pub(super) const VIRIDIS: [[f32; 3]; 9] = [
    [0.267004, 0.004874, 0.329415],
    [0.282623, 0.140926, 0.457517],
    [0.253935, 0.265254, 0.529983],
    [0.206756, 0.371758, 0.553117],
    [0.163625, 0.471133, 0.558148],
    [0.127568, 0.566949, 0.550556],
    [0.134692, 0.658636, 0.517649],
    [0.266941, 0.748751, 0.440573],
    [0.993248, 0.906157, 0.143936],
];

/// Perceptually uniform blue-magenta-yellow map.
pub(super) const PLASMA: [[f32; 3]; 9] = [
    [0.050383, 0.029803, 0.527975],
    [0.313, 0.008, 0.623],
    [0.493, 0.012, 0.658],
    [0.659, 0.134, 0.588],
    [0.798, 0.280, 0.470],
    [0.902, 0.425, 0.360],
    [0.969, 0.586, 0.257],
    [0.988, 0.766, 0.153],
    [0.940075, 0.975158, 0.131326],
];

/// Perceptually uniform black-purple-orange-yellow map.
pub(super) const INFERNO: [[f32; 3]; 9] = [
    [0.001462, 0.000466, 0.013866],
    [0.087, 0.044, 0.224],
    [0.258, 0.039, 0.406],
    [0.416, 0.090, 0.433],
    [0.578, 0.148, 0.404],
    [0.735, 0.215, 0.330],
    [0.878, 0.321, 0.212],
    [0.988, 0.645, 0.040],
    [0.988362, 0.998364, 0.644924],
];

/// Perceptually uniform black-purple-salmon-white map.
pub(super) const MAGMA: [[f32; 3]; 9] = [
    [0.001462, 0.000466, 0.013866],
    [0.083, 0.060, 0.257],
    [0.232, 0.060, 0.438],
    [0.390, 0.100, 0.501],
    [0.550, 0.161, 0.506],
    [0.718, 0.215, 0.475],
    [0.945, 0.377, 0.365],
    [0.996, 0.624, 0.427],
    [0.987053, 0.991438, 0.749504],
];

/// Magenta to yellow ramp.
pub(super) const SPRING: [[f32; 3]; 2] = [[1.0, 0.0, 1.0], [1.0, 1.0, 0.0]];

/// Dark green to pale yellow ramp.
pub(super) const SUMMER: [[f32; 3]; 2] = [[0.0, 0.5, 0.4], [1.0, 1.0, 0.4]];

/// Red to yellow ramp.
pub(super) const AUTUMN: [[f32; 3]; 2] = [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0]];

/// Blue to spring-green ramp.
pub(super) const WINTER: [[f32; 3]; 2] = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.5]];

/// Purple-blue-green-orange-red spectral map.
pub(super) const RAINBOW: [[f32; 3]; 5] = [
    [0.5, 0.0, 1.0],
    [0.0, 0.71, 0.93],
    [0.5, 1.0, 0.7],
    [1.0, 0.7, 0.35],
    [1.0, 0.0, 0.0],
];

/// High-contrast spectral map with dark endpoints.
pub(super) const TURBO: [[f32; 3]; 9] = [
    [0.190, 0.072, 0.232],
    [0.276, 0.408, 0.860],
    [0.154, 0.684, 0.947],
    [0.090, 0.887, 0.632],
    [0.635, 0.996, 0.239],
    [0.931, 0.820, 0.181],
    [0.984, 0.516, 0.116],
    [0.882, 0.227, 0.063],
    [0.480, 0.016, 0.011],
];

/// Full hue wheel; starts and ends on red.
pub(super) const HSV_WHEEL: [[f32; 3]; 7] = [
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
];

/// Diverging blue-white-red map.
pub(super) const SEISMIC: [[f32; 3]; 5] = [
    [0.0, 0.0, 0.3],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
];

/// Elevation-style map: sea blue, shoreline green, highland brown, snow.
pub(super) const TERRAIN: [[f32; 3]; 9] = [
    [0.2, 0.2, 0.6],
    [0.033, 0.533, 0.933],
    [0.0, 0.8, 0.4],
    [0.5, 0.9, 0.5],
    [1.0, 1.0, 0.6],
    [0.75, 0.68, 0.465],
    [0.5, 0.36, 0.33],
    [0.75, 0.68, 0.665],
    [1.0, 1.0, 1.0],
];
