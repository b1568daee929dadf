use crate::round::Lie;

// Tour-average expected-strokes control points, (distance, strokes).
// Distances are in the curve's native unit: feet for the green curve,
// yards for everything else. The short-bunker hump around 60-140 yards
// is in the published averages and is kept as-is.

pub const TEE: &[(f64, f64)] = &[
    (100.0, 2.92),
    (120.0, 2.99),
    (140.0, 2.97),
    (160.0, 2.99),
    (180.0, 3.05),
    (200.0, 3.12),
    (220.0, 3.17),
    (240.0, 3.25),
    (260.0, 3.45),
    (280.0, 3.65),
    (300.0, 3.71),
    (320.0, 3.79),
    (340.0, 3.86),
    (360.0, 3.92),
    (380.0, 3.96),
    (400.0, 3.99),
    (420.0, 4.02),
    (440.0, 4.08),
    (460.0, 4.17),
    (480.0, 4.28),
    (500.0, 4.41),
    (520.0, 4.54),
    (540.0, 4.65),
    (560.0, 4.74),
    (580.0, 4.79),
    (600.0, 4.82),
];

pub const FAIRWAY: &[(f64, f64)] = &[
    (20.0, 2.40),
    (40.0, 2.60),
    (60.0, 2.70),
    (80.0, 2.75),
    (100.0, 2.80),
    (120.0, 2.85),
    (140.0, 2.91),
    (160.0, 2.98),
    (180.0, 3.08),
    (200.0, 3.19),
    (220.0, 3.32),
    (240.0, 3.42),
    (260.0, 3.53),
    (280.0, 3.62),
    (300.0, 3.71),
    (320.0, 3.79),
    (340.0, 3.86),
    (360.0, 3.92),
    (380.0, 3.96),
    (400.0, 3.99),
    (420.0, 4.02),
    (440.0, 4.08),
    (460.0, 4.17),
    (480.0, 4.28),
    (500.0, 4.41),
    (520.0, 4.54),
    (540.0, 4.65),
    (560.0, 4.74),
    (580.0, 4.79),
    (600.0, 4.82),
];

pub const ROUGH: &[(f64, f64)] = &[
    (20.0, 2.59),
    (40.0, 2.78),
    (60.0, 2.91),
    (80.0, 2.96),
    (100.0, 3.02),
    (120.0, 3.08),
    (140.0, 3.15),
    (160.0, 3.23),
    (180.0, 3.31),
    (200.0, 3.42),
    (220.0, 3.53),
    (240.0, 3.64),
    (260.0, 3.74),
    (280.0, 3.83),
    (300.0, 3.90),
    (320.0, 3.98),
    (340.0, 4.06),
    (360.0, 4.14),
    (380.0, 4.22),
    (400.0, 4.30),
    (420.0, 4.38),
    (440.0, 4.46),
    (460.0, 4.53),
    (480.0, 4.61),
    (500.0, 4.66),
    (520.0, 4.71),
    (540.0, 4.76),
    (560.0, 4.81),
    (580.0, 4.85),
    (600.0, 4.88),
];

pub const BUNKER: &[(f64, f64)] = &[
    (20.0, 2.53),
    (40.0, 2.82),
    (60.0, 3.15),
    (80.0, 3.24),
    (100.0, 3.23),
    (120.0, 3.21),
    (140.0, 3.22),
    (160.0, 3.28),
    (180.0, 3.40),
    (200.0, 3.55),
    (220.0, 3.70),
    (240.0, 3.84),
    (260.0, 3.93),
    (280.0, 4.00),
    (300.0, 4.04),
    (320.0, 4.12),
    (340.0, 4.26),
    (360.0, 4.41),
    (380.0, 4.55),
    (400.0, 4.69),
    (420.0, 4.73),
    (440.0, 4.78),
    (460.0, 4.82),
    (480.0, 4.87),
    (500.0, 4.92),
    (520.0, 4.97),
    (540.0, 5.02),
    (560.0, 5.07),
    (580.0, 5.11),
    (600.0, 5.15),
];

pub const RECOVERY: &[(f64, f64)] = &[
    (100.0, 3.80),
    (120.0, 3.78),
    (140.0, 3.80),
    (160.0, 3.81),
    (180.0, 3.82),
    (200.0, 3.87),
    (220.0, 3.92),
    (240.0, 3.97),
    (260.0, 4.03),
    (280.0, 4.10),
    (300.0, 4.20),
    (320.0, 4.31),
    (340.0, 4.44),
    (360.0, 4.56),
    (380.0, 4.66),
    (400.0, 4.75),
    (420.0, 4.79),
    (440.0, 4.84),
    (460.0, 4.88),
    (480.0, 4.92),
    (500.0, 4.97),
    (520.0, 5.02),
    (540.0, 5.07),
    (560.0, 5.12),
    (580.0, 5.16),
    (600.0, 5.20),
];

// Green distances are in feet; values are expected putts to hole out.
pub const GREEN: &[(f64, f64)] = &[
    (1.0, 1.001),
    (2.0, 1.009),
    (3.0, 1.053),
    (4.0, 1.147),
    (5.0, 1.256),
    (6.0, 1.357),
    (7.0, 1.443),
    (8.0, 1.515),
    (9.0, 1.575),
    (10.0, 1.626),
    (15.0, 1.784),
    (20.0, 1.878),
    (25.0, 1.939),
    (30.0, 1.984),
    (40.0, 2.058),
    (50.0, 2.135),
    (60.0, 2.211),
    (90.0, 2.454),
];

pub const CURVES: &[(Lie, &[(f64, f64)])] = &[
    (Lie::Tee, TEE),
    (Lie::Fairway, FAIRWAY),
    (Lie::Rough, ROUGH),
    (Lie::Bunker, BUNKER),
    (Lie::Recovery, RECOVERY),
    (Lie::Green, GREEN),
];
