/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// `2a-2a = 0`
    CombineLikeTerms,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    /// `a*a^(-1) = 1`
    CombineLikeFactors,

    /// `(a*b)^n = a^n*b^n`, for integer `n`
    DistributePower,

    /// `(a^b)^n = a^(b*n)`, for integer `n`
    PowerPower,

    /// `sin(u)^2 + cos(u)^2 = 1`
    Pythagorean,

    /// `cos(u)^2 - sin(u)^2 = cos(2u)`
    DoubleAngle,

    /// `sin(0) = 0`
    /// `cos(0) = 1`
    /// `exp(0) = 1`
    /// `ln(1) = 0`
    /// `ln(exp(u)) = u`
    EvaluateFunction,
}
