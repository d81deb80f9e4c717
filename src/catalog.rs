//! The reading-list pages to migrate.
//!
//! The page set is fixed: these are the six book pages of the
//! workspace's reading-list database. Pages must be shared with the
//! integration before the tool can touch them.

/// One book page of the reading list
#[derive(Debug, Clone, Copy)]
pub struct Book {
    pub page_id: &'static str,
    pub title: &'static str,
}

pub const BOOKS: &[Book] = &[
    Book {
        page_id: "18cfcf15-b6ad-8167-a571-f768b898058d",
        title: "죽음의 수용소에서",
    },
    Book {
        page_id: "28cfcf15-b6ad-8080-b1d0-d6cd428b4271",
        title: "어린왕자",
    },
    Book {
        page_id: "195fcf15-b6ad-8091-9c4e-dd7962ad33ed",
        title: "넥서스",
    },
    Book {
        page_id: "1b8fcf15-b6ad-8020-89f3-f72e8a3491b0",
        title: "사랑의기술",
    },
    Book {
        page_id: "18cfcf15-b6ad-81f3-8caa-f4921d88683b",
        title: "기회의 심리학",
    },
    Book {
        page_id: "18cfcf15-b6ad-8066-84af-ecbf1ab8cedc",
        title: "지적대화를 위한 넓고 얕은 지식 1",
    },
];
