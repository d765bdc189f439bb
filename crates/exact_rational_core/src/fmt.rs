use crate::Rational;
use std::fmt;

// "n" when the denominator is 1, "n/d" otherwise
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Rational;
    use num_bigint::BigInt;

    #[test]
    fn rational_fmt_test() {
        let samples = vec![
            ((0, 1), "0"),
            ((0, -5), "0"),
            ((4, 2), "2"),
            ((-4, 2), "-2"),
            ((6, 4), "3/2"),
            ((1, -2), "-1/2"),
            ((-1, -2), "1/2"),
            ((5, 6), "5/6"),
            ((-7, 1), "-7"),
        ];

        for ((num, den), expected) in samples.into_iter() {
            let r = Rational::new(BigInt::from(num), BigInt::from(den)).unwrap();
            assert_eq!(r.to_string(), expected);
        }
    }

    #[test]
    fn rational_fmt_big_test() {
        let num: BigInt = "123456789012345678901234567890".parse().unwrap();
        let den: BigInt = "-98765432109876543210987654321".parse().unwrap();
        let r = Rational::new(num, den).unwrap();

        assert_eq!(r.to_string(), "-137174210/109739369");

        let r = Rational::new(BigInt::from(2).pow(100) + 1, BigInt::from(3).pow(50)).unwrap();
        assert_eq!(
            r.to_string(),
            "1267650600228229401496703205377/717897987691852588770249",
        );
        assert_eq!(format!("{:?}", Rational::default()), "Rational(0)");
    }
}
