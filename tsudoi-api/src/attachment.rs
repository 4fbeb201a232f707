#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum AttachmentKind {
    Image,
    File,
    Audio,
}

/// A reference to something attached to a post.
///
/// Only images carry their contents (as a data URL in `locator`); plain
/// files and audio recordings are referenced by file name only, the way a
/// blob store handle would be if one existed.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    pub locator: String,
}

impl Attachment {
    pub fn image(data_url: String) -> Attachment {
        Attachment {
            kind: AttachmentKind::Image,
            locator: data_url,
        }
    }

    pub fn file(name: String) -> Attachment {
        Attachment {
            kind: AttachmentKind::File,
            locator: name,
        }
    }

    pub fn audio(name: String) -> Attachment {
        Attachment {
            kind: AttachmentKind::Audio,
            locator: name,
        }
    }

    pub fn is_image(&self) -> bool {
        self.kind == AttachmentKind::Image
    }
}
