//! Builder category selection.

use sdknix_schema::PackageType;

/// Builder category of a package: which builder function the generated
/// document calls for it.
///
/// A closed set of eight categories; selection is total, with [`SrcOnly`]
/// as the generic fallback.
///
/// [`SrcOnly`]: Builder::SrcOnly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builder {
    /// `build-tools` components.
    BuildTools,
    /// `cmdline-tools` components.
    CmdlineTools,
    /// The emulator.
    Emulator,
    /// NDK releases (`ndk` and the legacy `ndk-bundle`).
    Ndk,
    /// `platform-tools` components.
    PlatformTools,
    /// Prebuilt toolchain components (`cmake`, `skiaparser`).
    Prebuilt,
    /// The legacy `tools` component.
    Tools,
    /// Plain unpacked sources; the fallback for source-like metadata types
    /// and unrecognized path roots.
    SrcOnly,
}

impl Builder {
    /// All categories in document signature order, fallback last.
    pub const ALL: [Self; 8] = [
        Self::BuildTools,
        Self::CmdlineTools,
        Self::Emulator,
        Self::Ndk,
        Self::PlatformTools,
        Self::Prebuilt,
        Self::Tools,
        Self::SrcOnly,
    ];

    /// Name of the builder function the generated document calls.
    pub fn fn_name(self) -> &'static str {
        match self {
            Self::BuildTools => "mkBuildTools",
            Self::CmdlineTools => "mkCmdlineTools",
            Self::Emulator => "mkEmulator",
            Self::Ndk => "mkNdk",
            Self::PlatformTools => "mkPlatformTools",
            Self::Prebuilt => "mkPrebuilt",
            Self::Tools => "mkTools",
            Self::SrcOnly => "mkSrcOnly",
        }
    }

    /// Select the category for a package from its metadata type and the
    /// first segment of its raw path.
    ///
    /// Source-like types always install as plain sources regardless of
    /// path; everything else dispatches on the path root.
    pub fn select(package_type: PackageType, first_segment: &str) -> Self {
        if package_type.is_source_like() {
            return Self::SrcOnly;
        }
        match first_segment {
            "build-tools" => Self::BuildTools,
            "cmdline-tools" => Self::CmdlineTools,
            "emulator" => Self::Emulator,
            "ndk" | "ndk-bundle" => Self::Ndk,
            "platform-tools" => Self::PlatformTools,
            "tools" => Self::Tools,
            "cmake" | "skiaparser" => Self::Prebuilt,
            _ => Self::SrcOnly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Builder;
    use sdknix_schema::PackageType;

    #[test]
    fn source_like_type_wins_over_path() {
        assert_eq!(
            Builder::select(PackageType::Platform, "build-tools"),
            Builder::SrcOnly
        );
        assert_eq!(
            Builder::select(PackageType::SysImg, "emulator"),
            Builder::SrcOnly
        );
    }

    #[test]
    fn generic_types_dispatch_on_path_root() {
        assert_eq!(
            Builder::select(PackageType::Generic, "ndk-bundle"),
            Builder::Ndk
        );
        assert_eq!(Builder::select(PackageType::Generic, "ndk"), Builder::Ndk);
        assert_eq!(
            Builder::select(PackageType::Generic, "cmake"),
            Builder::Prebuilt
        );
        assert_eq!(
            Builder::select(PackageType::Generic, "skiaparser"),
            Builder::Prebuilt
        );
        assert_eq!(
            Builder::select(PackageType::Generic, "tools"),
            Builder::Tools
        );
        assert_eq!(
            Builder::select(PackageType::Generic, "platform-tools"),
            Builder::PlatformTools
        );
    }

    #[test]
    fn unknown_path_root_falls_back_to_src_only() {
        assert_eq!(
            Builder::select(PackageType::Generic, "unknown-thing"),
            Builder::SrcOnly
        );
    }
}
