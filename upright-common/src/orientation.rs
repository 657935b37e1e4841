crate::utils::maybe_convertible_enum!(
    #[repr(u16)]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    /// Operations that have to be applied to orient the image correctly
    ///
    /// The values are the Exif orientation codes. Mirroring is horizontal and
    /// happens before the counter-clockwise rotation.
    pub enum Orientation {
        #[default]
        Id = 1,
        Rotation90 = 8,
        Rotation180 = 3,
        Rotation270 = 6,
        Mirrored = 2,
        MirroredRotation90 = 5,
        MirroredRotation180 = 4,
        MirroredRotation270 = 7,
    }
);

impl Orientation {
    /// Orientation for an Exif code, [`Orientation::Id`] for invalid codes
    ///
    /// ```
    /// # use upright_common::orientation::Orientation;
    /// assert_eq!(Orientation::from_exif(6), Orientation::Rotation270);
    /// assert_eq!(Orientation::from_exif(0), Orientation::Id);
    /// assert_eq!(Orientation::from_exif(9), Orientation::Id);
    /// ```
    pub fn from_exif(code: u16) -> Self {
        Self::try_from(code).unwrap_or_default()
    }

    /// Exif code in the range 1 to 8
    pub fn exif_code(self) -> u16 {
        self.into()
    }

    pub fn mirror(self) -> bool {
        matches!(
            self,
            Self::Mirrored
                | Self::MirroredRotation90
                | Self::MirroredRotation180
                | Self::MirroredRotation270
        )
    }

    pub fn rotate(self) -> Rotation {
        match self {
            Self::Id | Self::Mirrored => Rotation::_0,
            Self::Rotation90 | Self::MirroredRotation90 => Rotation::_90,
            Self::Rotation180 | Self::MirroredRotation180 => Rotation::_180,
            Self::Rotation270 | Self::MirroredRotation270 => Rotation::_270,
        }
    }

    /// Width and height are exchanged by the correction
    pub fn swaps_dimensions(self) -> bool {
        matches!(self.rotate(), Rotation::_90 | Rotation::_270)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.mirror(), self.rotate()) {
            (false, Rotation::_0) => write!(f, "normal"),
            (true, Rotation::_0) => write!(f, "mirrored"),
            (false, rotation) => write!(f, "rotated {}°", rotation.degrees()),
            (true, rotation) => write!(f, "mirrored, rotated {}°", rotation.degrees()),
        }
    }
}

/// Counter-clockwise rotation in steps of 90 degrees
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    _0,
    _90,
    _180,
    _270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::_0 => 0,
            Rotation::_90 => 90,
            Rotation::_180 => 180,
            Rotation::_270 => 270,
        }
    }
}
