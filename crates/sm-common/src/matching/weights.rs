/// Share of each component in the total match score.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.4,
    availability: 0.3,
    performance: 0.3,
};

/// Split between the skill the project leans on and the other one.
pub const SKILL_WEIGHTS: SkillWeights = SkillWeights {
    dominant: 0.7,
    secondary: 0.3,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub availability: f64,
    pub performance: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.availability + self.performance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillWeights {
    pub dominant: f64,
    pub secondary: f64,
}

impl SkillWeights {
    pub fn sum(&self) -> f64 {
        self.dominant + self.secondary
    }
}
