/// The fixed static pages shown on the public school profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfilePage {
    History,
    VisionMission,
    Facilities,
    ContactAddress,
}

impl ProfilePage {
    pub const ALL: [ProfilePage; 4] = [
        ProfilePage::History,
        ProfilePage::VisionMission,
        ProfilePage::Facilities,
        ProfilePage::ContactAddress,
    ];

    /// Key used in `/public/page/{key}`.
    pub fn key(&self) -> &'static str {
        match self {
            ProfilePage::History => "sejarah",
            ProfilePage::VisionMission => "visi_misi",
            ProfilePage::Facilities => "fasilitas",
            ProfilePage::ContactAddress => "kontak_alamat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfilePage::History => "History",
            ProfilePage::VisionMission => "Vision & Mission",
            ProfilePage::Facilities => "Facilities",
            ProfilePage::ContactAddress => "Contact & Address",
        }
    }
}
