use super::Subject;

/// A bundled document that is always available without uploading.
pub struct Sample {
    pub name: &'static str,
    pub title: &'static str,
    pub subject: Subject,
    /// Extracted plain text used for chat context and quiz generation.
    pub text: &'static str,
    /// Page contents as rendered by the viewer.
    pub pages: &'static [&'static str],
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "Physics Part 1 - Units and Measurements",
        title: "Units and Measurements",
        subject: Subject::Physics,
        text: include_str!("../../templates/extract/units_and_measurements.md"),
        pages: &[
            "Chapter 1: Physical Quantities and Units\n\nPhysics is the natural science that studies matter, its motion and behavior through space and time.\n\nUnits and measurements are fundamental concepts in physics. The International System of Units (SI) provides standardized units for measuring physical quantities.\n\nFundamental quantities include:\n• Length (meter)\n• Mass (kilogram)\n• Time (second)\n• Electric current (ampere)",
            "Measurement and Precision\n\nMeasurements involve precision and accuracy. Precision refers to the closeness of measurements to each other, while accuracy refers to the closeness of a measurement to the true value.\n\nSignificant figures are important in scientific measurements. They indicate the precision of a measurement.\n\nExample: If a measurement is recorded as 2.35 cm, it has three significant figures.",
            "Error Analysis\n\nEvery measurement has some uncertainty associated with it. This uncertainty is called measurement error.\n\nTypes of errors:\n• Systematic errors\n• Random errors\n• Gross errors\n\nError propagation must be considered when combining measurements.",
        ],
    },
    Sample {
        name: "Physics Part 1 - Motion in a Straight Line",
        title: "Motion in a Straight Line",
        subject: Subject::Physics,
        text: include_str!("../../templates/extract/motion_in_a_straight_line.md"),
        pages: &[
            "Chapter 2: Motion in a Straight Line\n\nMotion in a straight line is one of the fundamental concepts in mechanics. When a body moves along a straight line, it is said to be in rectilinear motion.\n\nThe position of an object is described by its distance from a reference point.\n\nDisplacement vs Distance:\n• Displacement is the change in position\n• Distance is the total path length",
            "Velocity and Speed\n\nVelocity is the rate of change of displacement with respect to time. It is a vector quantity.\n\nSpeed is the magnitude of velocity and is a scalar quantity.\n\nAverage velocity = Total displacement / Total time\nAverage speed = Total distance / Total time",
            "Acceleration\n\nAcceleration is the rate of change of velocity.\n\nUniform acceleration occurs when the velocity changes by equal amounts in equal intervals of time.\n\nEquations of motion:\n• v = u + at\n• s = ut + ½at²\n• v² = u² + 2as",
        ],
    },
    Sample {
        name: "Physics Part 2 - Work, Energy and Power",
        title: "Work, Energy and Power",
        subject: Subject::Physics,
        text: include_str!("../../templates/extract/work_energy_and_power.md"),
        pages: &[
            "Chapter 3: Work, Energy and Power\n\nWork, energy, and power are fundamental concepts in physics.\n\nWork is done when a force causes displacement.\n\nWork = Force × Displacement × cos(θ)\n\nWhere θ is the angle between force and displacement vectors.\n\nWork is a scalar quantity measured in joules (J).",
            "Energy\n\nEnergy is the capacity to do work.\n\nTypes of energy:\n• Kinetic energy: KE = ½mv²\n• Potential energy: PE = mgh\n• Mechanical energy = KE + PE\n\nConservation of energy: Energy cannot be created or destroyed, only transformed.",
            "Power\n\nPower is the rate of doing work.\n\nPower = Work / Time\n\nUnit of power is watt (W), which equals one joule per second.\n\nPower is also related to force and velocity:\nPower = Force × Velocity",
        ],
    },
];

/// Looks up a sample by its exact name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|sample| sample.name)
}
