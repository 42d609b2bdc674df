//! Sample content for trying out the index and the browse UI.
//!
//! Writes five chapters of the Buddha's life, two articles each, with the
//! full front-matter the UI understands:
//!
//! ```text
//! sutras/
//! ├── chapter1/
//! │   ├── article1-1.md
//! │   └── article1-2.md
//! ...
//! └── chapter5/
//!     ├── article5-1.md
//!     └── article5-2.md
//! ```
//!
//! Existing files with the same names are overwritten.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

struct SampleChapter {
    number: u32,
    title: &'static str,
    part: &'static str,
    articles: [SampleArticle; 2],
}

struct SampleArticle {
    title: &'static str,
    content: &'static str,
    tags: [&'static str; 2],
    keywords: [&'static str; 2],
    summary: &'static str,
    status: &'static str,
}

/// Front-matter of a generated article, in the order it's written.
#[derive(Serialize)]
struct ArticleFrontMatter<'a> {
    title: &'a str,
    chapter: &'a str,
    part: &'a str,
    order: usize,
    division: String,
    volume: String,
    tags: &'a [&'a str],
    keywords: &'a [&'a str],
    summary: &'a str,
    learning_status: &'a str,
}

const CHAPTERS: [SampleChapter; 5] = [
    SampleChapter {
        number: 1,
        title: "탄생",
        part: "룸비니",
        articles: [
            SampleArticle {
                title: "부처님의 탄생게",
                content: "천상천하 유아독존...",
                tags: ["자비", "보살"],
                keywords: ["룸비니", "마야부인"],
                summary: "룸비니 동산에서 부처님이 탄생하시며 외친 사자후.",
                status: "학습대기",
            },
            SampleArticle {
                title: "아홉 마리 용의 관욕",
                content: "아홉 마리 용이 물을 뿜어...",
                tags: ["청정", "축복"],
                keywords: ["구룡", "관욕"],
                summary: "탄생 직후 아홉 마리 용이 아기 부처님을 씻겨주다.",
                status: "학습중",
            },
        ],
    },
    SampleChapter {
        number: 2,
        title: "출가",
        part: "사문유관",
        articles: [
            SampleArticle {
                title: "동문에서 늙음을 보다",
                content: "태자가 동쪽 문으로 나가...",
                tags: ["무상", "고뇌"],
                keywords: ["동문", "노인"],
                summary: "화려한 궁궐 밖에서 늙음의 고통을 처음 목격하다.",
                status: "완료",
            },
            SampleArticle {
                title: "북문에서 수행자를 보다",
                content: "북쪽 문에서 수행자를 만나...",
                tags: ["희망", "해탈"],
                keywords: ["북문", "사문"],
                summary: "수행자의 평온한 모습에서 삶의 길을 찾다.",
                status: "학습대기",
            },
        ],
    },
    SampleChapter {
        number: 3,
        title: "수행",
        part: "고행림",
        articles: [
            SampleArticle {
                title: "6년의 고행",
                content: "하루에 깨 한 톨...",
                tags: ["인내", "정진"],
                keywords: ["설산", "고행"],
                summary: "깨달음을 얻기 위해 극한의 고행을 감내하다.",
                status: "학습중",
            },
            SampleArticle {
                title: "수자타의 유미죽",
                content: "고행을 멈추고...",
                tags: ["중도", "공양"],
                keywords: ["수자타", "유미죽"],
                summary: "극단을 버리고 유미죽을 공양 받아 기력을 회복하다.",
                status: "학습대기",
            },
        ],
    },
    SampleChapter {
        number: 4,
        title: "성도",
        part: "보리수",
        articles: [
            SampleArticle {
                title: "마왕의 유혹",
                content: "마왕 파순이...",
                tags: ["항마", "지혜"],
                keywords: ["마왕", "파순"],
                summary: "깨달음을 방해하는 마왕의 온갖 유혹을 물리치다.",
                status: "완료",
            },
            SampleArticle {
                title: "새벽 별을 보며",
                content: "동쪽 하늘의 샛별...",
                tags: ["깨달음", "붓다"],
                keywords: ["샛별", "연기법"],
                summary: "새벽 별을 보며 마침내 무상정등각을 이루다.",
                status: "완료",
            },
        ],
    },
    SampleChapter {
        number: 5,
        title: "전법",
        part: "녹야원",
        articles: [
            SampleArticle {
                title: "초전법륜",
                content: "다섯 비구에게...",
                tags: ["사성제", "팔정도"],
                keywords: ["녹야원", "오비구"],
                summary: "옛 도반들에게 처음으로 진리의 수레바퀴를 굴리다.",
                status: "학습중",
            },
            SampleArticle {
                title: "야사의 귀의",
                content: "부호의 아들 야사...",
                tags: ["귀의", "승가"],
                keywords: ["야사", "재가자"],
                summary: "모든 속박에서 벗어나는 길을 가르쳐 제자로 받아들이다.",
                status: "학습대기",
            },
        ],
    },
];

fn render_article(
    chapter: &SampleChapter,
    order: usize,
    article: &SampleArticle,
) -> Result<String, SampleError> {
    let front_matter = serde_yaml_ng::to_string(&ArticleFrontMatter {
        title: article.title,
        chapter: chapter.title,
        part: chapter.part,
        order,
        division: format!("{}품", chapter.number),
        volume: format!("{}권", chapter.number),
        tags: &article.tags,
        keywords: &article.keywords,
        summary: article.summary,
        learning_status: article.status,
    })?;
    Ok(format!(
        "---\n{front_matter}---\n\n# {}\n\n{}\n",
        article.title, article.content
    ))
}

/// Write the sample chapters under `dir` and return the written paths.
pub fn create_samples(dir: &Path) -> Result<Vec<PathBuf>, SampleError> {
    let mut written = Vec::new();
    for chapter in &CHAPTERS {
        let chapter_dir = dir.join(format!("chapter{}", chapter.number));
        fs::create_dir_all(&chapter_dir)?;

        for (idx, article) in chapter.articles.iter().enumerate() {
            let order = idx + 1;
            let path = chapter_dir.join(format!("article{}-{}.md", chapter.number, order));
            fs::write(&path, render_article(chapter, order, article)?)?;
            log::info!("Created: {}", path.display());
            written.push(path);
        }
    }
    Ok(written)
}
